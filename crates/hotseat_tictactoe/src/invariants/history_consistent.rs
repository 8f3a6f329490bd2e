//! History consistency: every marked cell has exactly one move behind it.

use super::Invariant;
use crate::Game;

/// Invariant: history length equals the number of marked cells, and each
/// move's cell carries that move's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let marked = board.cells().iter().filter(|c| !c.is_empty()).count();

        marked == game.history().len()
            && game
                .history()
                .iter()
                .all(|mv| board.get(mv.index).and_then(|c| c.mark()) == Some(mv.mark))
    }

    fn description() -> &'static str {
        "History matches the marked cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        game.start("Ada", "Grace").unwrap();
        game.handle_move(4);
        game.handle_move(0);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut game = Game::new();
        game.start("Ada", "Grace").unwrap();
        game.board.set(7, Mark::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
