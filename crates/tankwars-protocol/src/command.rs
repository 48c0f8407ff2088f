use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Coord, WireError};

pub const MOVE: &str = "MOVE";
pub const FIRE: &str = "FIRE";
pub const PLAYER: &str = "PLAYER";
pub const STATUS: &str = "STATUS";

/// A one-shot unit order. Both variants address the acting unit by the tile
/// it stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    Move { from: Coord, to: Coord },
    Fire { from: Coord, to: Coord },
}

impl Command {
    pub fn origin(&self) -> Coord {
        match *self {
            Command::Move { from, .. } | Command::Fire { from, .. } => from,
        }
    }

    pub fn target(&self) -> Coord {
        match *self {
            Command::Move { to, .. } | Command::Fire { to, .. } => to,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Command::Move { .. } => MOVE,
            Command::Fire { .. } => FIRE,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = (self.origin(), self.target());
        write!(f, "{} {} {} {} {}", self.verb(), from.x, from.y, to.x, to.y)
    }
}

impl FromStr for Command {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().unwrap_or_default();

        let mut nums = [0_i32; 4];
        for slot in nums.iter_mut() {
            let raw = parts
                .next()
                .ok_or_else(|| WireError::InvalidCommand(s.to_string()))?;
            *slot = raw
                .parse()
                .map_err(|_| WireError::InvalidCommand(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(WireError::InvalidCommand(s.to_string()));
        }

        let from = Coord::new(nums[0], nums[1]);
        let to = Coord::new(nums[2], nums[3]);
        match verb {
            MOVE => Ok(Command::Move { from, to }),
            FIRE => Ok(Command::Fire { from, to }),
            _ => Err(WireError::InvalidCommand(s.to_string())),
        }
    }
}

/// Every line a client may send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Player,
    Status,
    Order(Command),
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Player => f.write_str(PLAYER),
            Request::Status => f.write_str(STATUS),
            Request::Order(cmd) => write!(f, "{cmd}"),
        }
    }
}

impl From<Command> for Request {
    fn from(cmd: Command) -> Self {
        Request::Order(cmd)
    }
}

/// Server reply to a MOVE or FIRE line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandAck {
    Accepted,
    Rejected(String),
}

impl CommandAck {
    pub fn from_response(response: &str) -> Self {
        match response.trim() {
            "OK" => CommandAck::Accepted,
            other => CommandAck::Rejected(other.to_string()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, CommandAck::Accepted)
    }
}

/// Strip line breaks and collapse double spaces so one request never spans
/// more than one protocol line.
pub fn sanitize_line(line: &str) -> String {
    let mut out: String = line.chars().filter(|c| *c != '\r' && *c != '\n').collect();
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out
}
