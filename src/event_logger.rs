//! Game event logging for replay and analysis

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::{error, info};

use crate::game::{Cell, GameOverReason, Heading};

/// Types of game events that can be logged
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A game began
    GameStart {
        columns: i32,
        rows: i32,
        tick_ms: u64,
    },
    /// Heading change accepted
    DirectionChange { direction: Heading },
    /// Snake ate food
    FoodEaten { location: Cell, score: usize },
    /// Tick interval shrank
    SpeedChange { tick_ms: u64 },
    Paused,
    Resumed,
    /// Snake crashed
    GameOver { reason: GameOverReason, score: usize },
    /// Player restarted after game over
    Restart,
}

/// Logged event with timestamp
#[derive(Debug, Serialize)]
struct LogEntry {
    /// Unix timestamp in milliseconds
    timestamp_ms: u128,
    /// The event data
    #[serde(flatten)]
    event: GameEvent,
}

/// Game event logger
pub struct EventLogger {
    /// File writer (None if logging disabled)
    writer: Option<Mutex<BufWriter<File>>>,
}

impl EventLogger {
    /// Create a logger appending to `path`, or a disabled one when `path` is None
    pub fn new(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::disabled();
        };

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                info!("Event logging enabled, writing to {}", path.display());
                Self {
                    writer: Some(Mutex::new(BufWriter::new(file))),
                }
            }
            Err(e) => {
                error!("Failed to open event log file {}: {}", path.display(), e);
                Self::disabled()
            }
        }
    }

    /// A logger that drops every event
    pub fn disabled() -> Self {
        Self { writer: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Log a game event
    pub fn log(&self, event: GameEvent) {
        let Some(ref writer) = self.writer else {
            return;
        };

        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let entry = LogEntry { timestamp_ms, event };

        if let Ok(mut w) = writer.lock() {
            if let Ok(json) = serde_json::to_string(&entry) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    pub fn log_start(&self, columns: i32, rows: i32, tick: Duration) {
        self.log(GameEvent::GameStart {
            columns,
            rows,
            tick_ms: tick.as_millis() as u64,
        });
    }

    pub fn log_direction(&self, direction: Heading) {
        self.log(GameEvent::DirectionChange { direction });
    }

    pub fn log_food_eaten(&self, location: Cell, score: usize) {
        self.log(GameEvent::FoodEaten { location, score });
    }

    pub fn log_speed(&self, tick: Duration) {
        self.log(GameEvent::SpeedChange {
            tick_ms: tick.as_millis() as u64,
        });
    }

    pub fn log_pause(&self, paused: bool) {
        self.log(if paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
    }

    pub fn log_game_over(&self, reason: GameOverReason, score: usize) {
        self.log(GameEvent::GameOver { reason, score });
    }

    pub fn log_restart(&self) {
        self.log(GameEvent::Restart);
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::disabled()
    }
}
