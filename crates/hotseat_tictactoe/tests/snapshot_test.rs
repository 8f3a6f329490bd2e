//! Snapshot export.

use hotseat_tictactoe::{Game, GameSnapshot, GameStatus, Mark};
use serde_json::{Value, json};

#[test]
fn test_snapshot_of_unstarted_game() {
    let snapshot = Game::new().snapshot();
    assert!(snapshot.players().is_empty());
    assert_eq!(*snapshot.status(), GameStatus::AwaitingStart);
    assert_eq!(snapshot.to_move(), &None);
}

#[test]
fn test_snapshot_json_shape() {
    let mut game = Game::new();
    game.start("Ada", "Grace").unwrap();
    game.handle_move(4);

    let value: Value = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(value["status"], json!("InProgress"));
    assert_eq!(value["to_move"], json!("Grace"));
    assert_eq!(value["players"][0]["name"], json!("Ada"));
    assert_eq!(value["players"][1]["mark"], json!("O"));
    assert_eq!(value["history"], json!([{ "mark": "X", "index": 4 }]));
    assert_eq!(value["board"]["cells"][4], json!({ "Marked": "X" }));
}

#[test]
fn test_snapshot_restores_from_json() {
    let mut game = Game::new();
    game.start("Ada", "Grace").unwrap();
    for index in [0, 3, 1, 4, 2] {
        game.handle_move(index);
    }
    let text = serde_json::to_string(&game.snapshot()).unwrap();

    let restored: GameSnapshot = serde_json::from_str(&text).unwrap();

    assert_eq!(*restored.status(), GameStatus::Won(Mark::X));
    assert_eq!(restored, game.snapshot());
}
