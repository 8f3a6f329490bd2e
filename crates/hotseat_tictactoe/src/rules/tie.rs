//! Tie detection.

use crate::board::Board;
use tracing::instrument;

/// True iff the board is full.
///
/// Callers consult this only after a win check came back negative, so a
/// full board with a completed line is never reported as a tie.
#[instrument(skip(board))]
pub fn check_tie(board: &Board) -> bool {
    board.is_full()
}
