//! Session settings from a TOML file and the command line.

use crate::cli::Cli;
use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a run of one or more games.
///
/// ```toml
/// player_x = "human"
/// player_o = "expert"
/// delay_ms = 0
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Participant for X. Asked interactively when unset.
    #[serde(default)]
    player_x: Option<PlayerKind>,

    /// Participant for O. Asked interactively when unset.
    #[serde(default)]
    player_o: Option<PlayerKind>,

    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,

    /// Seed for random players. Drawn from the OS when unset.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_delay_ms() -> u64 {
    1250
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Loads the file named on the command line, if any, then applies the
    /// command-line values on top.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Replaces every setting the command line provides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(kind) = cli.player_x {
            self.player_x = Some(kind);
        }
        if let Some(kind) = cli.player_o {
            self.player_o = Some(kind);
        }
        if let Some(delay_ms) = cli.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        self
    }

    /// Pause before each computer move.
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
