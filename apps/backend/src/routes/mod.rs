use actix_web::web;

use crate::ws::session;

pub mod health;
pub mod state;

/// Registers every endpoint. Shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ws", web::get().to(session::upgrade));
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/api").configure(state::configure_routes));
}
