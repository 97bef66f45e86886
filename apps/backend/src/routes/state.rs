//! Read-only view of the live match for observers that do not hold a socket.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::snapshot::GameSnapshot;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::ws::hub::CurrentState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateResponse {
    game_state: GameSnapshot,
    move_history: Vec<String>,
}

async fn current_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = app_state.hub.send(CurrentState).await?;
    Ok(HttpResponse::Ok().json(StateResponse {
        game_state: view.game_state,
        move_history: view.move_history,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/state", web::get().to(current_state));
}
