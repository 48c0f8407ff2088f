//! TankWars agent - plays one side of a TankWars game over TCP.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tankwars_agent::{run, AgentConfig, GameClient, RunSettings, TcpTransport};
use tankwars_core::DecisionEngine;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "tankwars-agent")]
#[command(about = "Autonomous TankWars player", version)]
struct Cli {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Game server host
    #[arg(long)]
    host: Option<String>,

    /// Game server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Pause before every poll, in milliseconds
    #[arg(long)]
    poll_ms: Option<u64>,

    /// Seed for target assignment
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many polls
    #[arg(long)]
    max_polls: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<AgentConfig> {
        let mut config = match &self.config {
            Some(path) => AgentConfig::load(path)?,
            None => AgentConfig::default(),
        };
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(poll_ms) = self.poll_ms {
            config.poll_interval_ms = poll_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.max_polls.is_some() {
            config.max_polls = self.max_polls;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    fmt().with_env_filter(filter).with_target(false).init();

    let config = cli.into_config()?;
    let address = config.address();

    let transport = TcpTransport::connect(&address)
        .await
        .with_context(|| format!("Failed to reach game server at {address}"))?;
    let client = GameClient::new(transport);

    let player = client.player().await.context("PLAYER request failed")?;
    info!(%player, "Playing");

    let mut engine = DecisionEngine::new(player, config.decision.clone());
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = run(&client, &mut engine, &mut rng, &RunSettings::from(&config))
        .await
        .context("Agent loop aborted")?;

    info!(
        polls = summary.polls,
        fired = summary.fired,
        engaged = summary.engaged,
        advanced = summary.advanced,
        rejected = summary.rejected,
        end = ?summary.end,
        "Run finished"
    );
    Ok(())
}
