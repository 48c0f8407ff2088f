//! Networked shell around the TankWars decision core.
//!
//! A [`TcpTransport`] carries one text request and one response line at a
//! time, [`GameClient`] gives those lines types, and [`run`] drives a
//! [`DecisionEngine`](tankwars_core::DecisionEngine) against the server
//! until the player is defeated.

pub mod client;
pub mod config;
pub mod runner;
pub mod transport;

pub use client::{ClientError, GameClient};
pub use config::AgentConfig;
pub use runner::{run, EndReason, RunSettings, RunSummary};
pub use transport::{Exchange, TcpTransport, TransportError};
