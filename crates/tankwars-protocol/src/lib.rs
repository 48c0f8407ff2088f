//! Wire-level types for the TankWars text protocol.
//!
//! Shared by the decision core and the network agent: grid coordinates and
//! their hex geometry, the STATUS snapshot schema, and the MOVE/FIRE command
//! lines.

mod command;
mod coord;
mod ids;
mod snapshot;
mod wire;

pub use crate::command::*;
pub use crate::coord::*;
pub use crate::ids::*;
pub use crate::snapshot::*;
pub use crate::wire::*;
