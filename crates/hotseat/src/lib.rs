//! Hotseat - two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`hotseat_tictactoe`]; this crate supplies the
//! collaborators around them:
//!
//! - **View**: [`app::TuiView`] for the terminal, [`replay::TranscriptView`]
//!   for headless runs
//! - **Input**: the name form and board keys in [`app::App`]
//! - **Config**: [`config::HotseatConfig`], including what blank names mean

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::{App, Field, Screen, TuiView};
pub use cli::{Cli, Command};
pub use config::{BlankNamePolicy, ConfigError, HotseatConfig, NameError};
pub use replay::{TranscriptView, replay};
