use thiserror::Error;

use crate::{PlayerId, WorldSnapshot};

#[derive(Debug, Error)]
pub enum WireError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid player response: {0:?}")]
    InvalidPlayer(String),
    #[error("invalid command line: {0:?}")]
    InvalidCommand(String),
}

/// Parse the reply to a PLAYER request.
pub fn parse_player(response: &str) -> Result<PlayerId, WireError> {
    response
        .trim()
        .parse::<u8>()
        .map(PlayerId)
        .map_err(|_| WireError::InvalidPlayer(response.to_string()))
}

pub fn decode_snapshot(response: &str) -> Result<WorldSnapshot, WireError> {
    Ok(serde_json::from_str(response)?)
}

pub fn encode_snapshot(snapshot: &WorldSnapshot) -> Result<String, WireError> {
    Ok(serde_json::to_string(snapshot)?)
}
