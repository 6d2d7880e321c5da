//! Engine configuration loaded from TOML.

use crate::geometry::GridLayout;
use crate::puzzle::{BoardSize, shuffle_moves_for};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for starting puzzle sessions.
///
/// ```toml
/// board_size = 4
/// tick_millis = 1000
///
/// [layout]
/// viewport = 390.0
/// item_margin = 2.0
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Board edge (3 through 6).
    board_size: BoardSize,

    /// Override for the shuffle walk length.
    shuffle_moves: Option<usize>,

    /// Milliseconds per elapsed-time tick.
    tick_millis: u64,

    /// Board geometry.
    layout: GridLayout,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            shuffle_moves: None,
            tick_millis: default_tick_millis(),
            layout: GridLayout::default(),
        }
    }
}

fn default_tick_millis() -> u64 {
    1000
}

impl PuzzleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(board_size = %config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be positive".to_string()));
        }
        Ok(config)
    }

    /// Returns a copy with a different board size.
    pub fn with_board_size(mut self, board_size: BoardSize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Returns a copy with an explicit shuffle walk length.
    pub fn with_shuffle_moves(mut self, moves: Option<usize>) -> Self {
        self.shuffle_moves = moves;
        self
    }

    /// Walk length to use: the override if set, otherwise the size default.
    pub fn effective_shuffle_moves(&self) -> usize {
        self.shuffle_moves
            .unwrap_or_else(|| shuffle_moves_for(self.board_size.get()))
    }

    /// Tick spacing as a duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
