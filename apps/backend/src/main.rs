use actix::Actor;
use actix_web::{web, App, HttpServer};
use duel_backend::config::ServerConfig;
use duel_backend::middleware::RequestLogger;
use duel_backend::routes;
use duel_backend::state::app_state::AppState;
use duel_backend::ws::hub::MatchHub;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let hub = MatchHub::new().start();
    let data = web::Data::new(AppState::new(hub, config.ws));

    info!(
        host = %config.host,
        port = config.port,
        heartbeat_secs = config.ws.heartbeat_interval.as_secs(),
        client_timeout_secs = config.ws.client_timeout.as_secs(),
        "starting duel backend"
    );
    println!(
        "🚀 Starting Duel Backend on http://{}:{}",
        config.host, config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
