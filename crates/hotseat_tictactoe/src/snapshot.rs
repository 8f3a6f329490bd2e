//! Serializable view of a game.

use crate::action::Move;
use crate::board::Board;
use crate::game::Game;
use crate::types::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a [`Game`], suitable for logging or export.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board cells.
    board: Board,
    /// Seated players, empty before start.
    players: Vec<Player>,
    /// Current status.
    status: GameStatus,
    /// Name of the player to move, while in progress.
    to_move: Option<String>,
    /// Accepted moves in order.
    history: Vec<Move>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board().clone(),
            players: game
                .players()
                .map(|players| players.to_vec())
                .unwrap_or_default(),
            status: game.status(),
            to_move: game.current_player().map(|p| p.name().clone()),
            history: game.history().to_vec(),
        }
    }
}
