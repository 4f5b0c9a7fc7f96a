//! JSON shape a view consumes.

use serde_json::json;
use tictactoe::{Board, GameState};

#[test]
fn test_board_serializes_as_rows_with_nulls() {
    let mut game = GameState::new();
    game.place_mark(0, 0);
    game.place_mark(0, 1);

    let value = serde_json::to_value(game.board()).unwrap();
    assert_eq!(
        value,
        json!([["X", "O", null], [null, null, null], [null, null, null]])
    );

    game.reset();
    let value = serde_json::to_value(game.board()).unwrap();
    assert_eq!(
        value,
        json!([[null, null, null], [null, null, null], [null, null, null]])
    );
}

#[test]
fn test_state_fields_for_view() {
    let mut game = GameState::new();
    game.place_mark(1, 1);

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["current_player"], "O");
    assert_eq!(value["winner"], serde_json::Value::Null);
    assert_eq!(value["is_draw"], false);

    let back: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(back, game);
}

#[test]
fn test_board_from_rows() {
    let board: Board = serde_json::from_value(json!([
        [null, null, "X"],
        [null, "O", null],
        [null, null, null]
    ]))
    .unwrap();
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_played_state_deserializes() {
    let mut game = GameState::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.place_mark(row, col);
    }
    let value = serde_json::to_value(&game).unwrap();
    let back: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(back, game);
}

#[test]
fn test_board_without_history_rejected() {
    let value = json!({
        "board": [["X", "X", "X"], [null, null, null], [null, null, null]],
        "current_player": "O",
        "winner": null,
        "is_draw": false,
        "history": []
    });
    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("Inconsistent game state"));
}

#[test]
fn test_unrecorded_winner_rejected() {
    let mut game = GameState::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.place_mark(row, col);
    }
    let mut value = serde_json::to_value(&game).unwrap();
    value["winner"] = serde_json::Value::Null;
    value["current_player"] = json!("O");
    assert!(serde_json::from_value::<GameState>(value).is_err());
}

#[test]
fn test_moves_after_win_in_history_rejected() {
    // X completes the top row on move 5; two more moves follow in the record.
    let value = json!({
        "board": [["X", "X", "X"], ["O", "O", null], ["O", "X", null]],
        "current_player": "X",
        "winner": "X",
        "is_draw": false,
        "history": [
            {"player": "X", "position": "TopLeft"},
            {"player": "O", "position": "MiddleLeft"},
            {"player": "X", "position": "TopCenter"},
            {"player": "O", "position": "Center"},
            {"player": "X", "position": "TopRight"},
            {"player": "O", "position": "BottomLeft"},
            {"player": "X", "position": "BottomCenter"}
        ]
    });
    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("history does not replay"));
}
