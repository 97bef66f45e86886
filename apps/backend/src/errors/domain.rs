//! Domain-level error type used by the match engine.
//!
//! This error type is transport-agnostic. The session hub converts it to the
//! wire `error` message with [`DomainError::client_message`]; every variant
//! is recoverable and leaves the match untouched.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::domain::board::Player;

/// Why a move was refused. Clients only ever see "Invalid move.", the kind is
/// kept for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IllegalMoveKind {
    /// Both rosters must be populated before any move.
    NotActive,
    /// The move code is not one of the eight known codes.
    UnknownDirection,
    /// The piece kind cannot travel in the requested direction.
    DirectionNotAllowed,
    /// The piece name does not map to any movable kind.
    UnmovablePiece,
    /// A projected path cell lies outside the board.
    OffBoard,
    /// The destination holds a piece of the mover's own side.
    FriendlyDestination,
}

impl Display for IllegalMoveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let text = match self {
            IllegalMoveKind::NotActive => "match is not active",
            IllegalMoveKind::UnknownDirection => "unknown move code",
            IllegalMoveKind::DirectionNotAllowed => "direction not allowed for piece",
            IllegalMoveKind::UnmovablePiece => "piece cannot move",
            IllegalMoveKind::OffBoard => "path leaves the board",
            IllegalMoveKind::FriendlyDestination => "destination holds a friendly piece",
        };
        f.write_str(text)
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The acting player's roster is already populated.
    #[error("setup already completed for player {0}")]
    SetupConflict(Player),
    /// More placements were submitted than the home row has cells.
    #[error("setup submitted {0} pieces, the home row holds 5")]
    SetupOverflow(usize),
    /// The referenced character is not in the acting player's roster.
    #[error("unknown piece '{0}'")]
    UnknownPiece(String),
    /// The move violates a movement rule.
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMoveKind),
    /// Board and roster disagree.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn illegal(kind: IllegalMoveKind) -> Self {
        Self::IllegalMove(kind)
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The exact text sent to the originating client.
    pub fn client_message(&self) -> &'static str {
        match self {
            DomainError::SetupConflict(_) => "Setup already completed.",
            DomainError::SetupOverflow(_) => "Invalid setup.",
            DomainError::UnknownPiece(_) => "Invalid character.",
            DomainError::IllegalMove(_) => "Invalid move.",
            DomainError::Invariant(_) => "Internal error.",
        }
    }
}
