//! Win detection.

use crate::board::Board;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// The eight triples of indices that form a line.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line completely filled with `mark`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Marked(mark))))
}

/// True iff `mark` holds all three cells of some line.
///
/// Only the mark that just moved needs checking: a move can complete a line
/// for its own mark and nobody else's.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// Returns whichever mark has a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win(board, mark))
}
