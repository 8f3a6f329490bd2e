//! The rendering collaborator.
//!
//! The game core never draws anything. A [`View`] receives render commands
//! from [`GameSession`](crate::GameSession) and is expected to forward cell
//! clicks back through [`GameSession::handle_move`](crate::GameSession::handle_move).

use crate::board::Board;

/// Receives render commands from a session.
pub trait View {
    /// Draw all nine cells with their current marks.
    fn render_board(&mut self, board: &Board);

    /// Show a status message (win or tie announcement).
    fn render_message(&mut self, text: &str);

    /// Remove any displayed message.
    fn clear_message(&mut self);

    /// Players were discarded; show the name form again.
    fn request_players(&mut self);
}

impl<V: View + ?Sized> View for &mut V {
    fn render_board(&mut self, board: &Board) {
        (**self).render_board(board);
    }

    fn render_message(&mut self, text: &str) {
        (**self).render_message(text);
    }

    fn clear_message(&mut self) {
        (**self).clear_message();
    }

    fn request_players(&mut self) {
        (**self).request_players();
    }
}

/// One call received by a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// `render_board` with the board as drawn.
    Board(Board),
    /// `render_message` with its text.
    Message(String),
    /// `clear_message`.
    ClearMessage,
    /// `request_players`.
    RequestPlayers,
}

/// View that records every call, for headless use and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
}

impl RecordingView {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, oldest first.
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Forgets recorded calls.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Every message rendered so far.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The message currently on screen, if any.
    pub fn displayed_message(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::Message(text) => Some(Some(text.as_str())),
            ViewEvent::ClearMessage => Some(None),
            _ => None,
        })?
    }

    /// The most recently rendered board.
    pub fn last_board(&self) -> Option<&Board> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::Board(board) => Some(board),
            _ => None,
        })
    }
}

impl View for RecordingView {
    fn render_board(&mut self, board: &Board) {
        self.events.push(ViewEvent::Board(board.clone()));
    }

    fn render_message(&mut self, text: &str) {
        self.events.push(ViewEvent::Message(text.to_string()));
    }

    fn clear_message(&mut self) {
        self.events.push(ViewEvent::ClearMessage);
    }

    fn request_players(&mut self) {
        self.events.push(ViewEvent::RequestPlayers);
    }
}
