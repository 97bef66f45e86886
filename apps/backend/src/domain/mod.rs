//! Domain layer: pure match logic types and helpers.

pub mod board;
pub mod match_state;
pub mod move_log;
pub mod movement;
pub mod snapshot;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_consistency;

// Re-exports for ergonomics
pub use board::{Board, Piece, PieceRef, Player, Roster, Square, BOARD_SIZE};
pub use match_state::{Match, MoveOutcome, Phase, SetupOutcome};
pub use move_log::{MoveLog, MoveRecord};
pub use movement::{Direction, MovePlan, PieceKind};
pub use snapshot::GameSnapshot;
