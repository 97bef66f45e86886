//! Translates decoded client commands into match operations and the
//! broadcasts they produce.

use tracing::info;

use crate::domain::match_state::{Match, MoveOutcome};
use crate::domain::snapshot::GameSnapshot;
use crate::errors::domain::DomainError;
use crate::ws::protocol::{ClientMsg, ServerMsg};

/// Runs one command against the match.
///
/// On success returns the messages to broadcast to every client, in order.
/// On failure the match is unchanged and the error goes to the sender only.
pub fn handle_command(game: &mut Match, msg: ClientMsg) -> Result<Vec<ServerMsg>, DomainError> {
    match msg {
        ClientMsg::Setup { data } => {
            let names: Vec<String> = data
                .setup_positions
                .into_iter()
                .map(|position| position.name)
                .collect();
            game.setup(&names)?;
            Ok(vec![update(game)])
        }

        ClientMsg::Move { data } => match game.play_move(&data.character, &data.code)? {
            MoveOutcome::Continued { .. } => Ok(vec![
                update(game),
                ServerMsg::MoveHistory {
                    data: game.log().lines(),
                },
            ]),
            MoveOutcome::Won { winner, .. } => {
                Ok(vec![ServerMsg::End { winner }, update(game)])
            }
        },

        ClientMsg::Reset => {
            game.reset();
            info!("match reset");
            Ok(vec![update(game)])
        }
    }
}

fn update(game: &Match) -> ServerMsg {
    ServerMsg::Update {
        game_state: GameSnapshot::of(game),
    }
}
