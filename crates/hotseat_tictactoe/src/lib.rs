//! Hotseat tic-tac-toe core.
//!
//! Pure game logic for two players sharing one screen: a 3x3 [`Board`], the
//! win and tie [`rules`], and a [`Game`] state machine. Front ends implement
//! [`View`] and drive a [`GameSession`].
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameSession, GameStatus, Mark, RecordingView};
//!
//! let mut session = GameSession::new(RecordingView::new());
//! session.start("Ada", "Grace").unwrap();
//! for index in [0, 3, 1, 4, 2] {
//!     session.handle_move(index);
//! }
//! assert_eq!(session.game().status(), GameStatus::Won(Mark::X));
//! assert_eq!(session.view().displayed_message(), Some("🎉 Ada wins 🎉"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;
mod view;

pub use action::{GameError, IgnoredMove, Move, MoveOutcome};
pub use board::{Board, BoardError, CELL_COUNT};
pub use contracts::{CellIsOpen, Contract, GameIsLive, MoveContract};
pub use game::Game;
pub use position::Position;
pub use rules::{check_tie, check_win};
pub use session::{Announcement, GameSession};
pub use snapshot::GameSnapshot;
pub use types::{Cell, GameStatus, Mark, Player, Seat};
pub use view::{RecordingView, View, ViewEvent};
