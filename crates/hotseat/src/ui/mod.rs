//! Screen layout.

mod board;

pub use board::{BOARD_SIZE, center_rect, render_board};

use crate::app::{App, Field, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Draws the whole UI for the current screen.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_SIZE.1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Setup => draw_setup(f, chunks[1], chunks[2], app),
        Screen::Board => draw_game(f, chunks[1], chunks[2], app),
    }

    let help = match app.screen() {
        Screen::Setup => "Tab: switch field  Enter: start  Esc: quit",
        Screen::Board => "Arrows/1-9: choose  Enter: place  r: restart  n: new game  q: quit",
    };
    f.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

fn draw_setup(f: &mut Frame, area: Rect, status: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    for (rect, label, value, field) in [
        (fields[0], "Player 1 (X)", app.first_name(), Field::First),
        (fields[1], "Player 2 (O)", app.second_name(), Field::Second),
    ] {
        let border = if app.focus() == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label),
        );
        f.render_widget(input, rect);
    }

    if let Some(notice) = app.notice() {
        f.render_widget(
            Paragraph::new(notice)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center),
            status,
        );
    }
}

fn draw_game(f: &mut Frame, area: Rect, status: Rect, app: &App) {
    let session = app.session();
    let board_area = center_rect(area, BOARD_SIZE.0, BOARD_SIZE.1);
    let cursor = session
        .game()
        .current_player()
        .map(|_| app.cursor());
    render_board(
        f,
        board_area,
        session.view().board(),
        cursor,
        session.game().winning_line(),
    );

    let style = if session.game().status().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let line = Line::from(vec![Span::styled(app.status_line(), style)]);
    f.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP)),
        status,
    );
}
