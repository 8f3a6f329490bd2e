//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe on one keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to ./hotseat.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Name for player 1 (X); skips the form when both names are given
        #[arg(long)]
        player1: Option<String>,

        /// Name for player 2 (O)
        #[arg(long)]
        player2: Option<String>,
    },

    /// Play a list of cell indices (0-8) and print what happened
    Replay {
        /// Name for player 1 (X)
        #[arg(long)]
        player1: String,

        /// Name for player 2 (O)
        #[arg(long)]
        player2: String,

        /// Print the final game as JSON instead of a transcript
        #[arg(long)]
        json: bool,

        /// Cell indices in play order
        moves: Vec<usize>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            player1: None,
            player2: None,
        }
    }
}
