//! The poll loop: pace, fetch STATUS, decide, dispatch.

use std::time::Duration;

use rand::Rng;
use tankwars_core::{DecisionEngine, Intent, PollOutcome};
use tankwars_protocol::CommandAck;
use tracing::{debug, info, warn};

use crate::client::{ClientError, GameClient};
use crate::config::AgentConfig;
use crate::transport::Exchange;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSettings {
    /// Pause before every poll, so the server is never hammered.
    pub poll_interval: Duration,
    pub max_polls: Option<u64>,
}

impl From<&AgentConfig> for RunSettings {
    fn from(config: &AgentConfig) -> Self {
        Self {
            poll_interval: config.poll_interval(),
            max_polls: config.max_polls,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// No units left: the game is lost (or over) for this player.
    Defeated,
    PollLimit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub polls: u64,
    /// Polls skipped because no enemy base was left.
    pub idle_polls: u64,
    pub fired: u64,
    pub engaged: u64,
    pub advanced: u64,
    pub rejected: u64,
    pub end: Option<EndReason>,
}

impl RunSummary {
    fn record(&mut self, intent: Intent) {
        match intent {
            Intent::Fire => self.fired += 1,
            Intent::Engage => self.engaged += 1,
            Intent::Advance => self.advanced += 1,
        }
    }

    pub fn orders(&self) -> u64 {
        self.fired + self.engaged + self.advanced
    }
}

/// Drive `engine` until the player is defeated or the poll budget runs out.
///
/// Transport and decoding failures abort the run; nothing is retried.
pub async fn run<E, R>(
    client: &GameClient<E>,
    engine: &mut DecisionEngine,
    rng: &mut R,
    settings: &RunSettings,
) -> Result<RunSummary, ClientError>
where
    E: Exchange,
    R: Rng + ?Sized,
{
    let mut summary = RunSummary::default();

    loop {
        if settings.max_polls.is_some_and(|max| summary.polls >= max) {
            info!(polls = summary.polls, "Poll budget exhausted");
            summary.end = Some(EndReason::PollLimit);
            return Ok(summary);
        }

        tokio::time::sleep(settings.poll_interval).await;
        let world = client.status().await?;
        summary.polls += 1;

        match engine.decide(&world, rng) {
            PollOutcome::Defeated => {
                info!(
                    player = %engine.player(),
                    polls = summary.polls,
                    "No own units left"
                );
                summary.end = Some(EndReason::Defeated);
                return Ok(summary);
            }
            PollOutcome::NoEnemyBases => {
                summary.idle_polls += 1;
                debug!(iteration = world.iteration(), "No enemy bases, waiting for next poll");
            }
            PollOutcome::Orders(orders) => {
                debug!(
                    iteration = world.iteration(),
                    orders = orders.len(),
                    remembered = engine.memory().len(),
                    "Dispatching orders"
                );
                for order in &orders {
                    summary.record(order.intent);
                    if let CommandAck::Rejected(reason) = client.dispatch(&order.command).await? {
                        summary.rejected += 1;
                        warn!(
                            unit = %order.unit,
                            command = %order.command,
                            %reason,
                            "Order rejected"
                        );
                    }
                }
            }
        }
    }
}
