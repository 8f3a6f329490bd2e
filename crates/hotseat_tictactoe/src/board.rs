//! The 3x3 grid.

use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Index is not in 0..=8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
    /// Cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

/// 3x3 tic-tac-toe board, row-major (row = index / 3, col = index % 3).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places `mark` at `index`.
    ///
    /// Refuses, leaving the board untouched, when the index is out of range
    /// or the cell is already occupied. Occupied cells only become empty
    /// again through [`Board::clear`].
    #[instrument(skip(self))]
    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds(index))?;
        if !cell.is_empty() {
            return Err(BoardError::Occupied(index));
        }
        *cell = Cell::Marked(mark);
        Ok(())
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// True if `index` is in range and unmarked.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices still available for play.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert!(!board.is_full());
        assert_eq!(board.empty_indices().len(), 9);
    }

    #[test]
    fn test_set_refuses_occupied_cell() {
        let mut board = Board::new();
        board.set(4, Mark::X).unwrap();
        assert_eq!(board.set(4, Mark::O), Err(BoardError::Occupied(4)));
        assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_set_refuses_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.set(9, Mark::X), Err(BoardError::OutOfBounds(9)));
        assert_eq!(board, Board::new());
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            board.set(index, Mark::O).unwrap();
        }
        assert!(board.is_full());
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_rows() {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(4, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|.|.\n.|O|.\n.|.|.");
    }
}
