//! Snake in the terminal
//!
//! Type keys and press Enter: `w a s d` (or `up`, `left`, ...) to steer,
//! `p` to pause, `r` to restart after a game over, `q` to quit.
//! An optional TOML config path may be given as the only argument.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snake_game::clock::IntervalClock;
use snake_game::config::{GameConfig, INPUT_CHANNEL_CAPACITY};
use snake_game::event_logger::EventLogger;
use snake_game::input::{spawn_stdin_reader, ChannelInput};
use snake_game::render::TextRenderer;
use snake_game::{session, GameError, GameState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), GameError> {
    // Initialize logging on stderr so frames on stdout stay intact
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snake_game=info".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_file(path)?,
        None => GameConfig::default(),
    };

    let mut state = GameState::new(&config);
    let events = EventLogger::new(config.event_log.as_deref());

    let mut clock = IntervalClock::new(state.tick_interval());
    let (tx, mut input) = ChannelInput::new(INPUT_CHANNEL_CAPACITY);
    spawn_stdin_reader(tx);
    let mut renderer = TextRenderer::new(std::io::stdout()).with_clear_screen(true);

    let grid = state.grid();
    info!(
        "Starting {}x{} game (tick every {}ms)",
        grid.columns,
        grid.rows,
        state.tick_interval().as_millis()
    );

    session::run(&mut state, &mut clock, &mut input, &mut renderer, &events).await?;

    info!("Final score: {}", state.score());
    Ok(())
}
