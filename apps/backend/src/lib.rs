#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod ws;


pub use config::{ServerConfig, WsConfig};
pub use error::AppError;
pub use errors::{DomainError, IllegalMoveKind};
pub use middleware::RequestLogger;
pub use state::app_state::AppState;
pub use ws::hub::MatchHub;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
