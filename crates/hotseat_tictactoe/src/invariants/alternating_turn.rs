//! Alternating turns: X, O, X, O, ...

use super::Invariant;
use crate::Game;
use crate::types::{GameStatus, Mark, Seat};

/// Invariant: marks alternate starting with X, and the seat agrees.
///
/// While in progress (and after a tie) the seat to move is First after an
/// even number of moves. After a win the seat stays on the winner.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|mv| mv.mark != Mark::X) {
            return false;
        }
        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        match game.status() {
            GameStatus::Won(mark) => {
                history.last().map(|mv| mv.mark) == Some(mark)
                    && game.current_seat() == Seat::of(mark)
            }
            _ => game.current_seat().index() == history.len() % 2,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
