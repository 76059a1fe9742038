//! Single-player Snake
//!
//! `GameState` holds the whole game and advances one step per `tick()`.
//! The `clock`, `input` and `render` modules define the seams a front end
//! plugs into, and `session::run` drives all of them on one task.

pub mod clock;
pub mod config;
pub mod error;
pub mod event_logger;
pub mod game;
pub mod input;
pub mod render;
pub mod session;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Cell, GameOverReason, GameState, GameStatus, Grid, Heading, TickOutcome};
