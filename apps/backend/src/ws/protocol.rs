use serde::{Deserialize, Serialize};

use crate::domain::board::Player;
use crate::domain::snapshot::GameSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupPosition {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupData {
    #[serde(default)]
    pub setup_positions: Vec<SetupPosition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub character: String,
    /// Kept as text so that unknown codes surface as "Invalid move." rather
    /// than a protocol error.
    #[serde(rename = "move")]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMsg {
    Setup { data: SetupData },
    Move { data: MoveData },
    Reset,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMsg {
    Init {
        #[serde(rename = "gameState")]
        game_state: GameSnapshot,
    },

    Update {
        #[serde(rename = "gameState")]
        game_state: GameSnapshot,
    },

    MoveHistory {
        data: Vec<String>,
    },

    Error {
        message: String,
    },

    End {
        winner: Player,
    },
}

impl ServerMsg {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMsg::Error {
            message: message.into(),
        }
    }

    /// Value of the `type` tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMsg::Init { .. } => "init",
            ServerMsg::Update { .. } => "update",
            ServerMsg::MoveHistory { .. } => "moveHistory",
            ServerMsg::Error { .. } => "error",
            ServerMsg::End { .. } => "end",
        }
    }
}

/// Sent for text frames that do not decode as a [`ClientMsg`].
pub const MALFORMED_MESSAGE: &str = "Malformed message.";
