//! Game configuration: defaults and optional TOML overrides

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::game::location::{Cell, Grid};

/// Board width in pixels
pub const BOARD_WIDTH: i32 = 600;

/// Board height in pixels
pub const BOARD_HEIGHT: i32 = BOARD_WIDTH;

/// Tile (grid cell) size in pixels
pub const TILE_SIZE: i32 = 25;

/// Column of the head when a game starts
pub const START_COLUMN: i32 = 5;

/// Row of the head when a game starts
pub const START_ROW: i32 = 5;

// =============================================================================
// Speed schedule
// =============================================================================

/// Tick delay at the start of a game, in milliseconds
pub const INITIAL_TICK_MS: u64 = 100;

/// Tick delay never drops below this, in milliseconds
pub const MIN_TICK_MS: u64 = 50;

/// How much the tick delay shrinks per speed-up, in milliseconds
pub const SPEEDUP_STEP_MS: u64 = 5;

/// Speed up every time the score reaches a multiple of this
pub const SPEEDUP_EVERY: usize = 5;

// =============================================================================
// Input
// =============================================================================

/// Capacity of the channel between the key reader and the session
pub const INPUT_CHANNEL_CAPACITY: usize = 32;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

/// Tunable game settings. Every field falls back to its default constant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: i32,
    /// Board height in pixels
    pub board_height: i32,
    /// Tile size in pixels
    pub tile_size: i32,
    /// Starting head column
    pub start_column: i32,
    /// Starting head row
    pub start_row: i32,
    /// Starting tick delay (ms)
    pub initial_tick_ms: u64,
    /// Minimum tick delay (ms)
    pub min_tick_ms: u64,
    /// Tick delay decrement (ms)
    pub speedup_step_ms: u64,
    /// Score multiple that triggers a speed-up
    pub speedup_every: usize,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
    /// JSON-lines event log; disabled when absent
    pub event_log: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            tile_size: TILE_SIZE,
            start_column: START_COLUMN,
            start_row: START_ROW,
            initial_tick_ms: INITIAL_TICK_MS,
            min_tick_ms: MIN_TICK_MS,
            speedup_step_ms: SPEEDUP_STEP_MS,
            speedup_every: SPEEDUP_EVERY,
            seed: None,
            event_log: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a playable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::Validation(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }

        let grid = self.grid();
        if grid.columns == 0 || grid.rows == 0 {
            return Err(ConfigError::Validation(format!(
                "board {}x{} is smaller than one {}px tile",
                self.board_width, self.board_height, self.tile_size
            )));
        }

        if !grid.in_bounds(self.start_cell()) {
            return Err(ConfigError::Validation(format!(
                "start cell ({}, {}) is outside the {}x{} grid",
                self.start_column, self.start_row, grid.columns, grid.rows
            )));
        }

        if self.min_tick_ms == 0 || self.min_tick_ms > self.initial_tick_ms {
            return Err(ConfigError::Validation(format!(
                "min_tick_ms must be in 1..={}, got {}",
                self.initial_tick_ms, self.min_tick_ms
            )));
        }

        if self.speedup_every == 0 {
            return Err(ConfigError::Validation(
                "speedup_every must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Grid in cells
    pub fn grid(&self) -> Grid {
        Grid::from_board(self.board_width, self.board_height, self.tile_size)
    }

    /// Cell the head starts on
    pub fn start_cell(&self) -> Cell {
        Cell::new(self.start_column, self.start_row)
    }

    /// Starting tick delay
    pub fn initial_tick(&self) -> Duration {
        Duration::from_millis(self.initial_tick_ms)
    }

    /// Minimum tick delay
    pub fn min_tick(&self) -> Duration {
        Duration::from_millis(self.min_tick_ms)
    }

    /// Tick delay decrement
    pub fn speedup_step(&self) -> Duration {
        Duration::from_millis(self.speedup_step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid(), Grid::new(24, 24));
        assert_eq!(config.start_cell(), Cell::new(5, 5));
        assert_eq!(config.initial_tick(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::load_str("tile_size = 50\nseed = 7\n").unwrap();
        assert_eq!(config.tile_size, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.board_width, BOARD_WIDTH);
        assert_eq!(config.grid(), Grid::new(12, 12));
    }

    #[test]
    fn test_start_outside_grid_rejected() {
        let err = GameConfig::load_str("board_width = 100\nboard_height = 100\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_tick_bounds_rejected() {
        let err = GameConfig::load_str("initial_tick_ms = 40\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = GameConfig::load_str("speedup_every = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::load_str("tile_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_column = 2\nstart_row = 3").unwrap();

        let config = GameConfig::load_file(file.path()).unwrap();
        assert_eq!(config.start_cell(), Cell::new(2, 3));

        let missing = GameConfig::load_file("/nonexistent/snake.toml").unwrap_err();
        assert!(matches!(missing, ConfigError::NotFound(_)));
    }
}
