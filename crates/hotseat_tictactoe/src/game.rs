//! The game state machine.
//!
//! ```text
//! AwaitingStart --start--> InProgress --move--> Won | Tied
//!                              ^                    |
//!                              +------restart-------+
//! any state --new_game--> AwaitingStart
//! ```
//!
//! [`Game`] never talks to a view. Every operation reports what happened and
//! [`GameSession`](crate::GameSession) turns that into render calls.

use crate::action::{GameError, IgnoredMove, Move, MoveOutcome};
use crate::board::{Board, BoardError};
use crate::contracts::{Contract, MoveContract};
use crate::rules::{check_tie, winning_line};
use crate::snapshot::GameSnapshot;
use crate::types::{GameStatus, Player, Seat};
use tracing::{debug, info, instrument, warn};

/// Two-player tic-tac-toe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: Option<[Player; 2]>,
    pub(crate) seat: Seat,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game waiting for players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats two players and begins play.
    ///
    /// Player 1 plays X and moves first; player 2 plays O. Names are taken
    /// as given, blank or not. Starting again mid-game replaces the players
    /// and wipes the board. A finished game must be restarted or replaced
    /// with [`Game::new_game`] first.
    #[instrument(skip(self, first, second), fields(status = ?self.status))]
    pub fn start(
        &mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Result<(), GameError> {
        if self.status.is_over() {
            warn!("Start requested on a finished game");
            return Err(GameError::AlreadyFinished(self.status));
        }
        let players = [
            Player::new(first.into(), Seat::First.mark()),
            Player::new(second.into(), Seat::Second.mark()),
        ];
        info!(
            first = %players[0].name(),
            second = %players[1].name(),
            "Starting game"
        );
        self.players = Some(players);
        self.reset_play();
        Ok(())
    }

    /// Places the current player's mark at `index`.
    ///
    /// Moves before start, after the game is over, outside 0-8 or onto an
    /// occupied cell are ignored and leave the game untouched.
    #[instrument(skip(self), fields(status = ?self.status, seat = ?self.seat))]
    pub fn handle_move(&mut self, index: usize) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &index) {
            debug!(%reason, "Ignoring move");
            return MoveOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.seat.mark();
        if let Err(e) = self.board.set(index, mark) {
            debug!(error = %e, "Board refused move");
            return MoveOutcome::Ignored(e.into());
        }
        let mv = Move::new(mark, index);
        self.history.push(mv);

        let outcome = if let Some(line) = winning_line(&self.board, mark) {
            // The seat stays on the winner; the status guard freezes the game.
            self.status = GameStatus::Won(mark);
            MoveOutcome::Won { last: mv, line }
        } else if check_tie(&self.board) {
            self.status = GameStatus::Tied;
            self.seat = self.seat.other();
            MoveOutcome::Tied(mv)
        } else {
            self.seat = self.seat.other();
            MoveOutcome::Continued(mv)
        };

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Move postcondition failed");
        }

        info!(%mv, status = ?self.status, "Move accepted");
        outcome
    }

    /// Clears the board and plays again with the same players.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn restart(&mut self) -> Result<(), GameError> {
        if self.players.is_none() {
            debug!("Restart requested before start");
            return Err(GameError::NotStarted);
        }
        info!("Restarting game");
        self.reset_play();
        Ok(())
    }

    /// Drops the players and everything else; a fresh start is required.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn new_game(&mut self) {
        info!("Discarding game for a new one");
        *self = Self::default();
    }

    fn reset_play(&mut self) {
        self.board.clear();
        self.history.clear();
        self.seat = Seat::First;
        self.status = GameStatus::InProgress;
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Both players, once started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// The player in `seat`, once started.
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[seat.index()])
    }

    /// Seat whose turn it is.
    ///
    /// Meaningless once the game is over; check [`Game::status`] first.
    pub fn current_seat(&self) -> Seat {
        self.seat
    }

    /// The player to move, while the game is in progress.
    pub fn current_player(&self) -> Option<&Player> {
        match self.status {
            GameStatus::InProgress => self.player(self.seat),
            _ => None,
        }
    }

    /// The winning player, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        self.status
            .winner()
            .and_then(|mark| self.player(Seat::of(mark)))
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.status
            .winner()
            .and_then(|mark| winning_line(&self.board, mark))
    }

    /// Accepted moves since the last start or restart.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Serializable copy of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl From<BoardError> for IgnoredMove {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds(index) => IgnoredMove::OutOfBounds(index),
            BoardError::Occupied(index) => IgnoredMove::Occupied(index),
        }
    }
}
