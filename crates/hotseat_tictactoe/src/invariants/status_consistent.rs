//! Status consistency: the recorded status agrees with the board.

use super::Invariant;
use crate::Game;
use crate::rules::{check_win, winner};
use crate::types::GameStatus;

/// Invariant: status is exactly what the board implies.
///
/// - awaiting start: no players, empty board
/// - in progress: players seated, no line, board not full
/// - won: the winning mark holds a line
/// - tied: board full and no line
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::AwaitingStart => {
                game.players().is_none() && board.empty_indices().len() == 9
            }
            GameStatus::InProgress => {
                game.players().is_some() && winner(board).is_none() && !board.is_full()
            }
            GameStatus::Won(mark) => game.players().is_some() && check_win(board, mark),
            GameStatus::Tied => {
                game.players().is_some() && board.is_full() && winner(board).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board (never both won and tied)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_fresh_and_started_games_hold() {
        let mut game = Game::new();
        assert!(StatusConsistentInvariant::holds(&game));
        game.start("Ada", "Grace").unwrap();
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unreported_line_violates() {
        let mut game = Game::new();
        game.start("Ada", "Grace").unwrap();
        for index in [0, 1, 2] {
            game.board.set(index, Mark::X).unwrap();
        }
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
