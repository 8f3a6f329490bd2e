//! Moves and their outcomes.

use crate::types::{GameStatus, Mark};
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} -> {}", mark, index)]
pub struct Move {
    /// Who moved.
    pub mark: Mark,
    /// Where (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

/// Why a move was dropped without touching the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// No players yet.
    #[display("Game has not started")]
    NotStarted,
    /// Status is already Won or Tied.
    #[display("Game is already over")]
    GameOver,
    /// Index is not in 0..=8.
    #[display("Cell index {} is out of bounds", _0)]
    OutOfBounds(usize),
    /// Cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

/// Result of handing a cell index to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move accepted, play passes to the other player.
    Continued(Move),
    /// Move accepted and completed a line.
    Won {
        /// The winning move.
        last: Move,
        /// The completed line.
        line: [usize; 3],
    },
    /// Move accepted and filled the board without a line.
    Tied(Move),
    /// Move dropped; nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// True unless the move was ignored.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }

    /// The move that was applied, if any.
    pub fn applied(&self) -> Option<Move> {
        match *self {
            MoveOutcome::Continued(mv) | MoveOutcome::Tied(mv) => Some(mv),
            MoveOutcome::Won { last, .. } => Some(last),
            MoveOutcome::Ignored(_) => None,
        }
    }
}

/// Error from a control-surface operation (start, restart).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Restart needs players; call start first.
    #[display("Game has not started")]
    NotStarted,
    /// Start is only valid before or during play; restart or begin a new game.
    #[display("Game is over ({:?}); restart or begin a new game", _0)]
    AlreadyFinished(#[error(not(source))] GameStatus),
    /// A post-move invariant check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Mark::O, 7).to_string(), "O -> 7");
    }

    #[test]
    fn test_outcome_applied_move() {
        let mv = Move::new(Mark::X, 2);
        assert_eq!(MoveOutcome::Continued(mv).applied(), Some(mv));
        assert_eq!(
            MoveOutcome::Won {
                last: mv,
                line: [0, 1, 2]
            }
            .applied(),
            Some(mv)
        );
        let ignored = MoveOutcome::Ignored(IgnoredMove::Occupied(2));
        assert!(!ignored.is_accepted());
        assert_eq!(ignored.applied(), None);
    }
}
