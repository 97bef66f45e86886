use actix::Addr;

use crate::config::WsConfig;
use crate::ws::hub::MatchHub;

/// Shared handles given to every HTTP worker.
#[derive(Clone)]
pub struct AppState {
    /// The actor owning the live match.
    pub hub: Addr<MatchHub>,
    pub config: WsConfig,
}

impl AppState {
    pub fn new(hub: Addr<MatchHub>, config: WsConfig) -> Self {
        Self { hub, config }
    }
}
