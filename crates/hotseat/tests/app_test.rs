//! Key-driven flows through the terminal app, without a terminal.

use crossterm::event::KeyCode;
use hotseat::{App, BlankNamePolicy, Field, HotseatConfig, Screen};
use hotseat_tictactoe::{Cell, GameStatus, Mark, Position};

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

fn started_app() -> App {
    App::new(
        HotseatConfig::default(),
        Some("Ada".to_string()),
        Some("Grace".to_string()),
    )
}

fn press_digits(app: &mut App, digits: &str) {
    for c in digits.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_form_starts_game() {
    let mut app = App::new(HotseatConfig::default(), None, None);
    assert_eq!(app.screen(), Screen::Setup);

    type_text(&mut app, "Ada");
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.focus(), Field::Second);
    type_text(&mut app, "Grace");
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.screen(), Screen::Board);
    assert_eq!(app.status_line(), "Ada's turn (X)");
}

#[test]
fn test_blank_name_keeps_form_open() {
    let mut app = App::new(HotseatConfig::default(), None, None);
    type_text(&mut app, "Ada");
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.screen(), Screen::Setup);
    assert_eq!(app.notice(), Some("Player 2 name is required"));

    app.handle_key(KeyCode::Down);
    type_text(&mut app, "G");
    assert_eq!(app.notice(), None);
}

#[test]
fn test_substitute_policy_fills_blank_names() {
    let config = HotseatConfig::from_toml("blank_names = \"substitute\"").unwrap();
    assert_eq!(*config.blank_names(), BlankNamePolicy::Substitute);
    let mut app = App::new(config, None, None);
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.screen(), Screen::Board);
    assert_eq!(app.status_line(), "Player 1's turn (X)");
}

#[test]
fn test_backspace_edits_focused_field() {
    let mut app = App::new(HotseatConfig::default(), None, None);
    type_text(&mut app, "Adx");
    app.handle_key(KeyCode::Backspace);
    assert_eq!(app.first_name(), "Ad");
    assert_eq!(app.second_name(), "");
}

#[test]
fn test_cursor_places_marks() {
    let mut app = started_app();
    assert_eq!(app.cursor(), Position::Center);

    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Char(' '));

    let board = app.session().game().board();
    assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
    assert_eq!(board.get(0), Some(Cell::Marked(Mark::O)));
    assert_eq!(app.cursor(), Position::TopLeft);
}

#[test]
fn test_repeated_key_on_same_cell_is_ignored() {
    let mut app = started_app();
    press_digits(&mut app, "55");

    let game = app.session().game();
    assert_eq!(game.history().len(), 1);
    assert_eq!(app.status_line(), "Grace's turn (O)");
}

#[test]
fn test_win_then_restart() {
    let mut app = started_app();
    // X@0, O@3, X@1, O@4, X@2 as keys 1-9
    press_digits(&mut app, "14253");

    assert_eq!(app.session().game().status(), GameStatus::Won(Mark::X));
    assert!(app.status_line().contains("Ada"));

    app.handle_key(KeyCode::Char('r'));

    let game = app.session().game();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.history().is_empty());
    assert_eq!(app.session().view().message(), None);
    assert_eq!(app.status_line(), "Ada's turn (X)");
}

#[test]
fn test_new_game_returns_to_empty_form() {
    let mut app = started_app();
    press_digits(&mut app, "5");

    app.handle_key(KeyCode::Char('n'));

    assert_eq!(app.screen(), Screen::Setup);
    assert_eq!(app.first_name(), "");
    assert_eq!(app.second_name(), "");
    assert_eq!(app.focus(), Field::First);
}

#[test]
fn test_quit_keys() {
    let mut app = started_app();
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = App::new(HotseatConfig::default(), None, None);
    type_text(&mut app, "q");
    assert!(!app.should_quit());
    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit());
}
