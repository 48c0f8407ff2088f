use tankwars_core::World;
use tankwars_protocol::{decode_snapshot, parse_player, Command, CommandAck, PlayerId, Request, WireError};
use tracing::debug;

use crate::transport::{Exchange, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Typed view of the server's text commands.
pub struct GameClient<E> {
    exchange: E,
}

impl<E: Exchange> GameClient<E> {
    pub fn new(exchange: E) -> Self {
        Self { exchange }
    }

    async fn request(&self, request: Request) -> Result<String, TransportError> {
        self.exchange.exchange(&request.to_string()).await
    }

    /// The player this connection controls.
    pub async fn player(&self) -> Result<PlayerId, ClientError> {
        let response = self.request(Request::Player).await?;
        Ok(parse_player(&response)?)
    }

    /// Fetch and decode the current (censored) world.
    pub async fn status(&self) -> Result<World, ClientError> {
        let response = self.request(Request::Status).await?;
        let snapshot = decode_snapshot(&response)?;
        Ok(World::from_snapshot(snapshot))
    }

    pub async fn dispatch(&self, command: &Command) -> Result<CommandAck, ClientError> {
        let response = self.request(Request::Order(*command)).await?;
        let ack = CommandAck::from_response(&response);
        debug!(%command, accepted = ack.is_accepted(), "dispatched");
        Ok(ack)
    }
}
