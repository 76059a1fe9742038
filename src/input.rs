//! Player commands and the sources that deliver them

use std::io::{BufRead, BufReader};
use std::thread;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::game::Heading;

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change heading
    Turn(Heading),
    /// Pause or resume
    TogglePause,
    /// Start over after a game over
    Restart,
    /// Leave the game
    Quit,
}

impl Command {
    /// Map a key name to a command
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        match key.as_str() {
            "p" | "pause" => Some(Command::TogglePause),
            "r" | "restart" => Some(Command::Restart),
            "q" | "quit" | "exit" => Some(Command::Quit),
            other => Heading::parse(other).map(Command::Turn),
        }
    }
}

/// Source of player commands
#[async_trait]
pub trait InputSource: Send {
    /// Wait for the next command; `None` once the source is closed
    async fn next_command(&mut self) -> Option<Command>;
}

/// Input delivered over a tokio channel
pub struct ChannelInput {
    rx: mpsc::Receiver<Command>,
}

impl ChannelInput {
    /// Create the input and the sender that feeds it
    pub fn new(capacity: usize) -> (mpsc::Sender<Command>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self { rx })
    }
}

#[async_trait]
impl InputSource for ChannelInput {
    async fn next_command(&mut self) -> Option<Command> {
        self.rx.recv().await
    }
}

/// Forward keys read from `reader` as commands until it ends or the receiver closes.
///
/// Each line may hold several whitespace-separated keys. Runs on a plain
/// thread since stdin reads block.
pub fn spawn_key_reader<R>(reader: R, tx: mpsc::Sender<Command>) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            };

            for key in line.split_whitespace() {
                match Command::from_key(key) {
                    Some(command) => {
                        debug!("Key {:?} -> {:?}", key, command);
                        if tx.blocking_send(command).is_err() {
                            return;
                        }
                    }
                    None => warn!("Unknown key: {}", key),
                }
            }
        }
    })
}

/// Read commands from the process's stdin
pub fn spawn_stdin_reader(tx: mpsc::Sender<Command>) -> thread::JoinHandle<()> {
    spawn_key_reader(BufReader::new(std::io::stdin()), tx)
}
