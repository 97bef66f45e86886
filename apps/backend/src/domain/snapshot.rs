//! Serializable view of a match, as carried in `init` and `update` messages.

use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, Player, BOARD_SIZE};
use crate::domain::match_state::Match;

/// Roster entry as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub name: String,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pieces: Vec<PieceView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayersView {
    #[serde(rename = "A")]
    pub a: PlayerView,
    #[serde(rename = "B")]
    pub b: PlayerView,
}

/// Full match state. Cells hold `"<owner>-<name>"` or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: [[Option<String>; BOARD_SIZE]; BOARD_SIZE],
    pub players: PlayersView,
    pub current_player: Player,
}

impl GameSnapshot {
    pub fn of(game: &Match) -> Self {
        let board = game.board();
        Self {
            board: board
                .rows()
                .clone()
                .map(|row| row.map(|cell| cell.map(|piece| piece.to_string()))),
            players: PlayersView {
                a: player_view(board, Player::A),
                b: player_view(board, Player::B),
            },
            current_player: game.current_player(),
        }
    }
}

fn player_view(board: &Board, player: Player) -> PlayerView {
    PlayerView {
        pieces: board
            .roster(player)
            .pieces()
            .iter()
            .map(|p| PieceView {
                name: p.name.clone(),
                row: p.square.row(),
                col: p.square.col(),
            })
            .collect(),
    }
}
