//! Headless play from a list of moves.

use crate::config::HotseatConfig;
use hotseat_tictactoe::{Board, GameSession, MoveOutcome, View};
use tracing::{info, instrument};

/// View that writes every render call as plain text.
#[derive(Debug, Default)]
pub struct TranscriptView {
    transcript: String,
}

impl TranscriptView {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    fn note(&mut self, line: &str) {
        self.transcript.push_str(line);
        self.transcript.push('\n');
    }
}

impl View for TranscriptView {
    fn render_board(&mut self, board: &Board) {
        self.note(&board.to_string());
        self.note("");
    }

    fn render_message(&mut self, text: &str) {
        self.note(text);
    }

    fn clear_message(&mut self) {}

    fn request_players(&mut self) {
        self.note("(waiting for players)");
    }
}

/// Plays `moves` for two players and returns the finished session.
///
/// Ignored moves are noted in the transcript and skipped.
#[instrument(skip(config))]
pub fn replay(
    config: &HotseatConfig,
    first: &str,
    second: &str,
    moves: &[usize],
) -> anyhow::Result<GameSession<TranscriptView>> {
    let (first, second) = config.resolve_names(first, second)?;
    let mut session = GameSession::new(TranscriptView::new());
    session.start(first, second)?;

    for &index in moves {
        if let MoveOutcome::Ignored(reason) = session.handle_move(index) {
            session
                .view_mut()
                .note(&format!("Ignored move {}: {}", index, reason));
        }
    }

    info!(status = ?session.game().status(), "Replay finished");
    Ok(session)
}
