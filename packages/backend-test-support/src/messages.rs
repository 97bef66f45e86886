//! Assertions over server messages, written against raw JSON so tests check
//! the wire format rather than the backend's own types.

use serde_json::Value;

/// Panics unless `msg` carries the given `type` tag.
pub fn assert_type(msg: &Value, expected: &str) {
    assert_eq!(
        msg.get("type").and_then(Value::as_str),
        Some(expected),
        "unexpected message: {msg}"
    );
}

/// Panics unless `msg` is an `error` message with exactly this text.
pub fn assert_error(msg: &Value, expected: &str) {
    assert_type(msg, "error");
    assert_eq!(
        msg.get("message").and_then(Value::as_str),
        Some(expected),
        "unexpected error message: {msg}"
    );
}

/// The `gameState` object of an `init` or `update` message.
pub fn game_state(msg: &Value) -> &Value {
    msg.get("gameState")
        .unwrap_or_else(|| panic!("message has no gameState: {msg}"))
}

/// Label in a board cell of a `gameState`, or `None` for an empty cell.
pub fn cell(state: &Value, row: usize, col: usize) -> Option<&str> {
    state["board"][row][col].as_str()
}

pub fn current_player(state: &Value) -> &str {
    state["currentPlayer"]
        .as_str()
        .unwrap_or_else(|| panic!("gameState has no currentPlayer: {state}"))
}

/// Names in a player's roster, in roster order.
pub fn roster_names<'a>(state: &'a Value, player: &str) -> Vec<&'a str> {
    state["players"][player]["pieces"]
        .as_array()
        .map(|pieces| pieces.iter().filter_map(|p| p["name"].as_str()).collect())
        .unwrap_or_default()
}

/// True when the board is empty, both rosters are empty and A is to move.
pub fn is_initial(state: &Value) -> bool {
    let board_empty = state["board"]
        .as_array()
        .is_some_and(|rows| {
            rows.iter()
                .all(|row| row.as_array().is_some_and(|cells| cells.iter().all(Value::is_null)))
        });
    board_empty
        && roster_names(state, "A").is_empty()
        && roster_names(state, "B").is_empty()
        && state["currentPlayer"] == "A"
}
