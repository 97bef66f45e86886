// WebSocket test server utilities

use std::net::TcpListener;
use std::time::Duration;

use actix::{Actor, Addr};
use actix_web::{web, App, HttpServer};
use duel_backend::config::WsConfig;
use duel_backend::middleware::RequestLogger;
use duel_backend::routes;
use duel_backend::state::app_state::AppState;
use duel_backend::ws::hub::{ConnectionCount, MatchHub};

pub struct TestServer {
    pub handle: actix_web::dev::ServerHandle,
    pub addr: std::net::SocketAddr,
    pub hub: Addr<MatchHub>,
    join: actix_web::rt::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stops the server and waits for it to exit.
    pub async fn shutdown(self) {
        self.handle.stop(true).await;
        let _ = self.join.await;
    }
}

/// Start a real HTTP server on a random local port with a fresh hub.
///
/// Must run inside an actix system (`#[actix_web::test]`) so the hub actor
/// has an arbiter to live on.
pub async fn start_test_server() -> Result<TestServer, Box<dyn std::error::Error>> {
    start_test_server_with(WsConfig::default()).await
}

pub async fn start_test_server_with(
    config: WsConfig,
) -> Result<TestServer, Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let hub = MatchHub::new().start();
    let state_data = web::Data::new(AppState::new(hub.clone(), config));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .wrap(RequestLogger)
            .configure(routes::configure)
    })
    .workers(1)
    .shutdown_timeout(1)
    .listen(listener)?
    .run();

    let handle = server.handle();
    let join = actix_web::rt::spawn(server);

    Ok(TestServer {
        handle,
        addr,
        hub,
        join,
    })
}

pub async fn wait_for_connections(
    hub: &Addr<MatchHub>,
    expected: usize,
    timeout: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = tokio::time::Instant::now();
    loop {
        let count = hub.send(ConnectionCount).await?;
        if count == expected {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(
                format!("timeout waiting for connection count == {expected} (got {count})").into(),
            );
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
