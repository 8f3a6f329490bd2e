//! Application state and key handling.

use crate::config::HotseatConfig;
use crate::input::{digit_to_index, move_cursor};
use crossterm::event::KeyCode;
use hotseat_tictactoe::{Board, GameSession, GameStatus, Position, View};
use tracing::{debug, instrument, warn};

/// View backing the terminal UI; the draw pass reads it every frame.
#[derive(Debug, Default)]
pub struct TuiView {
    board: Board,
    message: Option<String>,
    players_requested: bool,
}

impl TuiView {
    /// Board as last rendered.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Message on screen, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns and clears the pending request for a fresh name form.
    pub fn take_players_request(&mut self) -> bool {
        std::mem::take(&mut self.players_requested)
    }
}

impl View for TuiView {
    fn render_board(&mut self, board: &Board) {
        self.board = board.clone();
    }

    fn render_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn request_players(&mut self) {
        self.players_requested = true;
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Name form.
    Setup,
    /// Board.
    Board,
}

/// Focused name field on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// Player 1.
    #[default]
    First,
    /// Player 2.
    Second,
}

impl Field {
    fn toggle(self) -> Self {
        match self {
            Field::First => Field::Second,
            Field::Second => Field::First,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession<TuiView>,
    config: HotseatConfig,
    first_name: String,
    second_name: String,
    focus: Field,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app, starting at once when both names are supplied.
    #[instrument(skip(config))]
    pub fn new(config: HotseatConfig, first: Option<String>, second: Option<String>) -> Self {
        let start_now = first.is_some() && second.is_some();
        let mut app = Self {
            session: GameSession::new(TuiView::default()),
            config,
            first_name: first.unwrap_or_default(),
            second_name: second.unwrap_or_default(),
            focus: Field::First,
            cursor: Position::default(),
            notice: None,
            should_quit: false,
        };
        if start_now {
            app.submit_names();
        }
        app
    }

    /// Current screen, derived from the game status.
    pub fn screen(&self) -> Screen {
        match self.session.game().status() {
            GameStatus::AwaitingStart => Screen::Setup,
            _ => Screen::Board,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession<TuiView> {
        &self.session
    }

    /// Text in the player 1 field.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Text in the player 2 field.
    pub fn second_name(&self) -> &str {
        &self.second_name
    }

    /// Focused name field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Form validation notice.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Line shown under the board.
    pub fn status_line(&self) -> String {
        let game = self.session.game();
        if let Some(message) = self.session.view().message() {
            return message.to_string();
        }
        match game.current_player() {
            Some(player) => format!("{}'s turn ({})", player.name(), player.mark()),
            None => String::new(),
        }
    }

    /// Dispatches a key press to the current screen.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen() {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Board => self.handle_board_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Enter => self.submit_names(),
            KeyCode::Backspace => {
                self.focused_field().pop();
            }
            KeyCode::Char(c) => {
                self.focused_field().push(c);
                self.notice = None;
            }
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                if let Err(e) = self.session.restart() {
                    warn!(error = %e, "Restart refused");
                }
                self.cursor = Position::default();
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_to_index(c).and_then(Position::from_index) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn place(&mut self, pos: Position) {
        let outcome = self.session.handle_move(pos.to_index());
        debug!(?pos, ?outcome, "Placed");
    }

    fn new_game(&mut self) {
        self.session.new_game();
        if self.session.view_mut().take_players_request() {
            self.first_name.clear();
            self.second_name.clear();
            self.focus = Field::First;
            self.notice = None;
        }
        self.cursor = Position::default();
    }

    fn submit_names(&mut self) {
        match self.config.resolve_names(&self.first_name, &self.second_name) {
            Ok((first, second)) => {
                if let Err(e) = self.session.start(first, second) {
                    warn!(error = %e, "Start refused");
                    self.notice = Some(e.to_string());
                } else {
                    self.notice = None;
                }
            }
            Err(e) => {
                debug!(error = %e, "Names rejected");
                self.notice = Some(e.to_string());
            }
        }
    }

    fn focused_field(&mut self) -> &mut String {
        match self.focus {
            Field::First => &mut self.first_name,
            Field::Second => &mut self.second_name,
        }
    }
}
