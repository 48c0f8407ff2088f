//! Agent configuration, loaded from an optional YAML file.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tankwars_core::DecisionConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Game server host
    pub host: String,

    /// Game server port
    pub port: u16,

    /// Pause before every STATUS poll, in milliseconds
    pub poll_interval_ms: u64,

    /// Seed for target assignment; random if unset
    pub seed: Option<u64>,

    /// Stop after this many polls (unbounded if unset)
    pub max_polls: Option<u64>,

    /// Decision thresholds
    pub decision: DecisionConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 1234,
            poll_interval_ms: 50,
            seed: None,
            max_polls: None,
            decision: DecisionConfig::default(),
        }
    }
}

impl AgentConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
