//! Shared helpers for backend integration tests: one-time logging setup and
//! assertions over the JSON messages the server sends.

pub mod logging;
pub mod messages;
