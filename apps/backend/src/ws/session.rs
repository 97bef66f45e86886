use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpMessage, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::state::app_state::AppState;
use crate::ws::hub::{Command, Connect, Disconnect, MatchHub, Outbound};
use crate::ws::protocol::{ClientMsg, ServerMsg, MALFORMED_MESSAGE};

/// Connection id of an upgraded request, left in the request extensions for
/// the request logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionId(pub Uuid);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn_id = Uuid::new_v4();
    req.extensions_mut().insert(ConnectionId(conn_id));
    let session = WsSession::new(
        conn_id,
        app_state.hub.clone(),
        app_state.config.heartbeat_interval,
        app_state.config.client_timeout,
    );
    ws::start(session, &req, stream)
}

/// One connected client. Decodes frames into commands for the hub and
/// relays hub messages back as JSON text.
pub struct WsSession {
    conn_id: Uuid,
    hub: Addr<MatchHub>,
    heartbeat_interval: Duration,
    client_timeout: Duration,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(
        conn_id: Uuid,
        hub: Addr<MatchHub>,
        heartbeat_interval: Duration,
        client_timeout: Duration,
    ) -> Self {
        Self {
            conn_id,
            hub,
            heartbeat_interval,
            client_timeout,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error_and_close(&self, ctx: &mut ws::WebsocketContext<Self>, message: &str) {
        Self::send_json(ctx, &ServerMsg::error(message));
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Unsupported)));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(self.heartbeat_interval, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > actor.client_timeout {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn handle_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        match serde_json::from_str::<ClientMsg>(text) {
            Ok(msg) => {
                debug!(conn_id = %self.conn_id, ?msg, "[WS SESSION] command received");
                self.hub.do_send(Command {
                    conn_id: self.conn_id,
                    msg,
                });
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    error = %err,
                    "[WS SESSION] malformed client message"
                );
                Self::send_json(ctx, &ServerMsg::error(MALFORMED_MESSAGE));
            }
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");

        self.hub.do_send(Connect {
            conn_id: self.conn_id,
            recipient: ctx.address().recipient(),
        });

        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.hub.do_send(Disconnect {
            conn_id: self.conn_id,
        });
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                self.handle_text(&text, ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, "Binary frames are not supported.");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Outbound> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Outbound, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &msg.0);
    }
}
