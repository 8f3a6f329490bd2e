//! End-to-end scenarios driven through a session and a recording view.

use hotseat_tictactoe::{
    Board, Cell, GameSession, GameStatus, IgnoredMove, Mark, MoveOutcome, RecordingView, Seat,
    ViewEvent,
};

fn session() -> GameSession<RecordingView> {
    let mut session = GameSession::new(RecordingView::new());
    session.start("Ada", "Grace").expect("fresh session starts");
    session.view_mut().clear();
    session
}

fn play(session: &mut GameSession<RecordingView>, moves: &[usize]) -> Vec<MoveOutcome> {
    moves.iter().map(|&index| session.handle_move(index)).collect()
}

#[test]
fn test_top_row_win_announces_first_player() {
    let mut session = session();
    let outcomes = play(&mut session, &[0, 3, 1, 4, 2]);

    assert!(matches!(outcomes[4], MoveOutcome::Won { line: [0, 1, 2], .. }));
    assert_eq!(session.game().status(), GameStatus::Won(Mark::X));
    let message = session.view().displayed_message().expect("win message");
    assert!(message.contains("Ada"));
    assert_eq!(session.view().messages().len(), 1);
}

#[test]
fn test_full_board_without_line_is_tied() {
    let mut session = session();
    // X O X / O X X / O X O
    let outcomes = play(&mut session, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    assert!(matches!(outcomes[8], MoveOutcome::Tied(_)));
    assert_eq!(session.game().status(), GameStatus::Tied);
    assert!(session.game().winner().is_none());
    assert!(session.game().board().is_full());
    assert!(session.view().displayed_message().unwrap().contains("tie"));
}

#[test]
fn test_line_on_last_cell_is_a_win_not_a_tie() {
    let mut session = session();
    // X O X / O O X / O X X: the ninth move completes the right column
    let outcomes = play(&mut session, &[0, 1, 2, 3, 5, 4, 7, 6, 8]);

    assert!(session.game().board().is_full());
    assert!(matches!(outcomes[8], MoveOutcome::Won { .. }));
    assert_eq!(session.game().status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_double_click_is_ignored() {
    let mut session = session();
    session.handle_move(4);
    let events_after_first = session.view().events().len();

    let outcome = session.handle_move(4);

    assert_eq!(outcome, MoveOutcome::Ignored(IgnoredMove::Occupied(4)));
    assert_eq!(session.game().board().get(4), Some(Cell::Marked(Mark::X)));
    assert_eq!(session.game().current_seat(), Seat::Second);
    assert_eq!(session.view().events().len(), events_after_first);
}

#[test]
fn test_clicks_after_win_are_ignored_without_notification() {
    let mut session = session();
    play(&mut session, &[0, 3, 1, 4, 2]);
    let events = session.view().events().to_vec();

    for index in 5..9 {
        assert_eq!(
            session.handle_move(index),
            MoveOutcome::Ignored(IgnoredMove::GameOver)
        );
    }

    assert_eq!(session.view().events(), events.as_slice());
    assert_eq!(session.game().history().len(), 5);
}

#[test]
fn test_turns_alternate_until_game_ends() {
    let mut session = session();
    let mut expected = Seat::First;
    for index in [4, 0, 8, 2, 1, 7] {
        assert_eq!(session.game().current_seat(), expected);
        session.handle_move(index);
        expected = expected.other();
    }
    assert_eq!(session.game().status(), GameStatus::InProgress);
}

#[test]
fn test_restart_after_win_keeps_players() {
    let mut session = session();
    play(&mut session, &[0, 3, 1, 4, 2]);

    session.restart().expect("restart after win");

    let game = session.game();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_seat(), Seat::First);
    let names: Vec<&str> = game
        .players()
        .unwrap()
        .iter()
        .map(|p| p.name().as_str())
        .collect();
    assert_eq!(names, ["Ada", "Grace"]);
    assert_eq!(session.view().displayed_message(), None);
    assert_eq!(session.view().last_board(), Some(&Board::new()));
}

#[test]
fn test_new_game_requests_players() {
    let mut session = session();
    play(&mut session, &[0, 3, 1, 4, 2]);

    session.new_game();

    assert_eq!(session.game().status(), GameStatus::AwaitingStart);
    assert!(session.game().players().is_none());
    assert_eq!(session.view().events().last(), Some(&ViewEvent::RequestPlayers));
    assert_eq!(session.view().displayed_message(), None);
    assert_eq!(
        session.handle_move(0),
        MoveOutcome::Ignored(IgnoredMove::NotStarted)
    );
}

#[test]
fn test_new_game_then_start_with_new_names() {
    let mut session = session();
    play(&mut session, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    session.new_game();

    session.start("Linus", "Ken").expect("start after new game");

    assert_eq!(
        session.game().current_player().map(|p| p.name().as_str()),
        Some("Linus")
    );
}
