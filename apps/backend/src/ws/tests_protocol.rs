use serde_json::json;

use crate::domain::board::Player;
use crate::domain::match_state::Match;
use crate::domain::snapshot::GameSnapshot;
use crate::ws::protocol::{ClientMsg, MoveData, ServerMsg, SetupData, SetupPosition};

#[test]
fn decodes_setup() {
    let msg: ClientMsg = serde_json::from_value(json!({
        "type": "setup",
        "data": {"setupPositions": [{"name": "P1"}, {"name": "H1"}]}
    }))
    .unwrap();

    assert_eq!(
        msg,
        ClientMsg::Setup {
            data: SetupData {
                setup_positions: vec![
                    SetupPosition { name: "P1".into() },
                    SetupPosition { name: "H1".into() },
                ]
            }
        }
    );
}

#[test]
fn decodes_move_with_unknown_code_as_text() {
    let msg: ClientMsg = serde_json::from_value(json!({
        "type": "move",
        "data": {"character": "A-P1", "move": "UP"}
    }))
    .unwrap();

    assert_eq!(
        msg,
        ClientMsg::Move {
            data: MoveData {
                character: "A-P1".into(),
                code: "UP".into()
            }
        }
    );
}

#[test]
fn decodes_reset() {
    let msg: ClientMsg = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
    assert_eq!(msg, ClientMsg::Reset);
}

#[test]
fn rejects_unknown_type_and_missing_data() {
    assert!(serde_json::from_str::<ClientMsg>(r#"{"type":"resign"}"#).is_err());
    assert!(serde_json::from_str::<ClientMsg>(r#"{"type":"move"}"#).is_err());
    assert!(serde_json::from_str::<ClientMsg>("not json").is_err());
}

#[test]
fn encodes_server_messages() {
    let snapshot = GameSnapshot::of(&Match::new());

    let init = serde_json::to_value(ServerMsg::Init {
        game_state: snapshot.clone(),
    })
    .unwrap();
    assert_eq!(init["type"], "init");
    assert_eq!(init["gameState"]["currentPlayer"], "A");

    let update = serde_json::to_value(ServerMsg::Update {
        game_state: snapshot,
    })
    .unwrap();
    assert_eq!(update["type"], "update");

    assert_eq!(
        serde_json::to_value(ServerMsg::MoveHistory {
            data: vec!["A-P1: F".into()]
        })
        .unwrap(),
        json!({"type": "moveHistory", "data": ["A-P1: F"]})
    );
    assert_eq!(
        serde_json::to_value(ServerMsg::error("Invalid move.")).unwrap(),
        json!({"type": "error", "message": "Invalid move."})
    );
    assert_eq!(
        serde_json::to_value(ServerMsg::End { winner: Player::B }).unwrap(),
        json!({"type": "end", "winner": "B"})
    );
}
