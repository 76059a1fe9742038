//! Top-level error type

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the game binary
#[derive(Error, Debug)]
pub enum GameError {
    /// Bad or unreadable configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to draw a frame
    #[error("render error: {0}")]
    Io(#[from] std::io::Error),
}
