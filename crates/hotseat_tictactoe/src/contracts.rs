//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. The precondition decides whether a move is ignored; the
//! postcondition checks the game invariants after it was applied.

use crate::action::{GameError, IgnoredMove};
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet, MonotonicTransition};
use crate::types::GameStatus;
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Why the action is refused when the precondition fails.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: the game accepts moves.
pub struct GameIsLive;

impl GameIsLive {
    /// Refuses before start and after the game is over.
    pub fn check(game: &Game) -> Result<(), IgnoredMove> {
        match game.status() {
            GameStatus::AwaitingStart => Err(IgnoredMove::NotStarted),
            GameStatus::Won(_) | GameStatus::Tied => Err(IgnoredMove::GameOver),
            GameStatus::InProgress => Ok(()),
        }
    }
}

/// Precondition: the index names an empty cell.
pub struct CellIsOpen;

impl CellIsOpen {
    /// Refuses indices past 8 and occupied cells.
    pub fn check(game: &Game, index: usize) -> Result<(), IgnoredMove> {
        match game.board().get(index) {
            None => Err(IgnoredMove::OutOfBounds(index)),
            Some(cell) if !cell.is_empty() => Err(IgnoredMove::Occupied(index)),
            Some(_) => Ok(()),
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - game is in progress
/// - cell is in range and empty
///
/// Postconditions:
/// - exactly one empty cell became marked, nothing else changed
/// - all [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<Game, usize> for MoveContract {
    type Rejection = IgnoredMove;

    #[instrument(skip(game))]
    fn pre(game: &Game, index: &usize) -> Result<(), IgnoredMove> {
        GameIsLive::check(game)?;
        CellIsOpen::check(game, *index)
    }

    #[instrument(skip_all)]
    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        if !MonotonicTransition::holds(before.board(), after.board()) {
            return Err(GameError::InvariantViolation(
                MonotonicTransition::description().to_string(),
            ));
        }
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
