//! Monotonic board: cells never change once marked.

use super::Invariant;
use crate::Game;
use crate::board::Board;

/// Invariant: replaying the history onto an empty board reproduces the board.
///
/// A replayed move onto an occupied cell, or any cell the history does not
/// explain, breaks it.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut replayed = Board::new();
        for mv in game.history() {
            if replayed.set(mv.index, mv.mark).is_err() {
                return false;
            }
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// Transition property: one move marks exactly one empty cell.
pub struct MonotonicTransition;

impl MonotonicTransition {
    /// True if `after` keeps every mark of `before` and adds exactly one.
    pub fn holds(before: &Board, after: &Board) -> bool {
        let mut added = 0;
        for (old, new) in before.cells().iter().zip(after.cells()) {
            if old.is_empty() {
                if !new.is_empty() {
                    added += 1;
                }
            } else if old != new {
                return false;
            }
        }
        added == 1
    }

    /// Human-readable description.
    pub fn description() -> &'static str {
        "A move marks exactly one empty cell and changes nothing else"
    }
}
