//! Hotseat - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use hotseat::{App, Cli, Command, HotseatConfig, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HotseatConfig::load(cli.config.as_deref())?;
    logging::init_tracing(&config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { player1, player2 } => tui::run_tui(App::new(config, player1, player2)),
        Command::Replay {
            player1,
            player2,
            json,
            moves,
        } => run_replay(&config, &player1, &player2, &moves, json),
    }
}

/// Plays the given moves and prints a transcript or JSON snapshot.
fn run_replay(
    config: &HotseatConfig,
    player1: &str,
    player2: &str,
    moves: &[usize],
    json: bool,
) -> Result<()> {
    let session = replay(config, player1, player2, moves)?;
    info!(status = ?session.game().status(), "Printing replay");
    if json {
        println!("{}", serde_json::to_string_pretty(&session.game().snapshot())?);
    } else {
        print!("{}", session.view().transcript());
    }
    Ok(())
}
