//! Decision core of a TankWars agent.
//!
//! Pure and I/O-free: a [`World`] built from one STATUS snapshot, hex
//! neighborhood queries over it, and a [`DecisionEngine`] that turns those
//! queries into at most one [`Command`](tankwars_protocol::Command) per unit
//! and poll.

mod decision;
mod memory;
mod spatial;
mod world;

pub use crate::decision::*;
pub use crate::memory::*;
pub use crate::spatial::*;
pub use crate::world::*;
