//! A game bound to its view.

use crate::action::{GameError, MoveOutcome};
use crate::game::Game;
use crate::view::View;
use tracing::{debug, instrument};

/// Text shown when a game ends.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Announcement {
    /// Someone completed a line.
    #[display("🎉 {} wins 🎉", _0)]
    Win(String),
    /// Board filled with no line.
    #[display("👔 It's a tie 👔")]
    Tie,
}

/// The single owned object a front end drives.
///
/// Holds the [`Game`] and its [`View`], and is the only place render calls
/// come from. Ignored moves produce no render calls at all, so repeated
/// clicks are harmless.
#[derive(Debug)]
pub struct GameSession<V> {
    game: Game,
    view: V,
}

impl<V: View> GameSession<V> {
    /// Creates a session waiting for players.
    pub fn new(view: V) -> Self {
        Self {
            game: Game::new(),
            view,
        }
    }

    /// Starts play with two names and draws the empty board.
    #[instrument(skip_all)]
    pub fn start(
        &mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Result<(), GameError> {
        self.game.start(first, second)?;
        self.view.clear_message();
        self.view.render_board(self.game.board());
        Ok(())
    }

    /// Forwards a clicked cell to the game and renders the result.
    #[instrument(skip(self))]
    pub fn handle_move(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.game.handle_move(index);
        match outcome {
            MoveOutcome::Ignored(_) => return outcome,
            MoveOutcome::Continued(_) => self.view.render_board(self.game.board()),
            MoveOutcome::Won { .. } => {
                self.view.render_board(self.game.board());
                let name = self
                    .game
                    .winner()
                    .map(|player| player.name().clone())
                    .unwrap_or_default();
                let text = Announcement::Win(name).to_string();
                debug!(%text, "Announcing win");
                self.view.render_message(&text);
            }
            MoveOutcome::Tied(_) => {
                self.view.render_board(self.game.board());
                self.view.render_message(&Announcement::Tie.to_string());
            }
        }
        outcome
    }

    /// Clears the board for another round with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.game.restart()?;
        self.view.render_board(self.game.board());
        self.view.clear_message();
        Ok(())
    }

    /// Throws everything away and asks the view for new players.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.game.new_game();
        self.view.clear_message();
        self.view.render_board(self.game.board());
        self.view.request_players();
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Splits the session into its game and view.
    pub fn into_parts(self) -> (Game, V) {
        (self.game, self.view)
    }
}
