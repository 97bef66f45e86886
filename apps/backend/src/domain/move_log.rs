use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::board::Player;
use crate::domain::movement::Direction;

/// One executed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub piece: String,
    pub direction: Direction,
}

/// Rendered as `"<player>-<piece>: <code>"`, e.g. `"A-P1: F"`.
impl Display for MoveRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}: {}", self.player, self.piece, self.direction)
    }
}

/// Append-only record of the moves of the live match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.entries.push(record);
    }

    pub fn entries(&self) -> &[MoveRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wire strings in execution order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
