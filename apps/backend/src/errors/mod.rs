//! Error handling for the duel backend.

pub mod domain;

pub use domain::{DomainError, IllegalMoveKind};
