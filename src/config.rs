//! TOML configuration for the tic-tac-toe rooms.
//!
//! ```toml
//! [tic-tac-toe]
//! name = "tic-tac-toe"
//! version = "1.0.0"
//! rooms = [1001, 1002]
//! scoring = "accumulate"
//! ```

use crate::error::ConfigError;
use crate::registry::RoomId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::ScoringMode;
use tracing::{debug, info, instrument};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct Config {
    /// The `[tic-tac-toe]` table.
    #[serde(rename = "tic-tac-toe", default)]
    tic_tac_toe: TicTacToeConfig,
}

/// Settings for the tic-tac-toe engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TicTacToeConfig {
    /// Name used to label log output.
    #[serde(default = "default_name")]
    name: String,

    /// Version used to label log output.
    #[serde(default = "default_version")]
    version: String,

    /// Rooms allowed to play.
    #[serde(default, alias = "groupNums")]
    rooms: Vec<RoomId>,

    /// How the computer opponent refreshes its scoring table.
    #[serde(default)]
    scoring: ScoringMode,
}

fn default_name() -> String {
    "tic-tac-toe".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            rooms: Vec::new(),
            scoring: ScoringMode::default(),
        }
    }
}

impl TicTacToeConfig {
    /// Creates a configuration for the given rooms with default settings.
    pub fn new(rooms: impl IntoIterator<Item = RoomId>) -> Self {
        Self {
            rooms: rooms.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Sets the scoring mode.
    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// `name@version`, as shown in log output.
    pub fn label(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl Config {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(
            label = %config.tic_tac_toe.label(),
            rooms = config.tic_tac_toe.rooms.len(),
            "Config parsed"
        );
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(label = %config.tic_tac_toe.label(), "Config loaded successfully");
        Ok(config)
    }
}
