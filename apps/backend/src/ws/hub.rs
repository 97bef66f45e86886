use std::collections::HashMap;

use actix::prelude::*;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::match_state::Match;
use crate::domain::snapshot::GameSnapshot;
use crate::ws::commands::handle_command;
use crate::ws::protocol::{ClientMsg, ServerMsg};

/// A message pushed to one connected session.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct Outbound(pub ServerMsg);

#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub conn_id: Uuid,
    pub recipient: Recipient<Outbound>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: Uuid,
}

/// A decoded client command, tagged with the connection that sent it.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Command {
    pub conn_id: Uuid,
    pub msg: ClientMsg,
}

#[derive(Message)]
#[rtype(result = "usize")]
pub struct ConnectionCount;

/// Read-only view for observers: current snapshot plus the move log.
#[derive(Message)]
#[rtype(result = "StateView")]
pub struct CurrentState;

#[derive(Debug, Clone, MessageResponse)]
pub struct StateView {
    pub game_state: GameSnapshot,
    pub move_history: Vec<String>,
}

/// Owns the single live match and every connection.
///
/// The actor mailbox is the only path to the match, so commands are handled
/// one at a time, each to completion, in arrival order.
#[derive(Default)]
pub struct MatchHub {
    game: Match,
    sessions: HashMap<Uuid, Recipient<Outbound>>,
}

impl MatchHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn send_to(&self, conn_id: Uuid, msg: ServerMsg) {
        match self.sessions.get(&conn_id) {
            Some(recipient) => recipient.do_send(Outbound(msg)),
            None => debug!(conn_id = %conn_id, "[HUB] reply target already gone"),
        }
    }

    fn broadcast(&self, msg: ServerMsg) {
        debug!(
            kind = msg.kind(),
            recipients = self.sessions.len(),
            "[HUB] broadcast"
        );
        for recipient in self.sessions.values() {
            recipient.do_send(Outbound(msg.clone()));
        }
    }
}

impl Actor for MatchHub {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[HUB] started");
    }
}

impl Handler<Connect> for MatchHub {
    type Result = ();

    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        msg.recipient.do_send(Outbound(ServerMsg::Init {
            game_state: GameSnapshot::of(&self.game),
        }));
        self.sessions.insert(msg.conn_id, msg.recipient);
        info!(
            conn_id = %msg.conn_id,
            connections = self.sessions.len(),
            "[HUB] client connected"
        );
    }
}

impl Handler<Disconnect> for MatchHub {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) -> Self::Result {
        if self.sessions.remove(&msg.conn_id).is_some() {
            info!(
                conn_id = %msg.conn_id,
                connections = self.sessions.len(),
                "[HUB] client disconnected"
            );
        }
    }
}

impl Handler<Command> for MatchHub {
    type Result = ();

    fn handle(&mut self, msg: Command, _ctx: &mut Self::Context) -> Self::Result {
        let Command { conn_id, msg } = msg;
        match handle_command(&mut self.game, msg) {
            Ok(outgoing) => {
                for out in outgoing {
                    self.broadcast(out);
                }
            }
            Err(err) => {
                warn!(conn_id = %conn_id, error = %err, "[HUB] command rejected");
                self.send_to(conn_id, ServerMsg::error(err.client_message()));
            }
        }
    }
}

impl Handler<ConnectionCount> for MatchHub {
    type Result = usize;

    fn handle(&mut self, _msg: ConnectionCount, _ctx: &mut Self::Context) -> Self::Result {
        self.sessions.len()
    }
}

impl Handler<CurrentState> for MatchHub {
    type Result = StateView;

    fn handle(&mut self, _msg: CurrentState, _ctx: &mut Self::Context) -> Self::Result {
        StateView {
            game_state: GameSnapshot::of(&self.game),
            move_history: self.game.log().lines(),
        }
    }
}
