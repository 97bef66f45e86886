//! WebSocket session coordination: wire protocol, per-connection session
//! actors and the hub that owns the live match.

pub mod commands;
pub mod hub;
pub mod protocol;
pub mod session;

#[cfg(test)]
mod tests_protocol;
