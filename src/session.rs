//! Session loop - drives one game from a clock and an input source
//!
//! Ticks and commands are handled on a single task, so the state is only
//! ever touched from here.

use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::GameError;
use crate::event_logger::EventLogger;
use crate::game::{GameState, GameStatus};
use crate::input::{Command, InputSource};
use crate::render::Renderer;

/// Run until the player quits or the input source closes
pub async fn run<C, I, R>(
    state: &mut GameState,
    clock: &mut C,
    input: &mut I,
    renderer: &mut R,
    events: &EventLogger,
) -> Result<(), GameError>
where
    C: Clock,
    I: InputSource,
    R: Renderer,
{
    let grid = state.grid();
    events.log_start(grid.columns, grid.rows, state.tick_interval());
    clock.set_period(state.tick_interval());
    renderer.render(state)?;

    loop {
        tokio::select! {
            _ = clock.tick() => {
                on_tick(state, clock, events);
                renderer.render(state)?;
            }
            command = input.next_command() => {
                let command = match command {
                    Some(Command::Quit) | None => break,
                    Some(command) => command,
                };
                if on_command(state, clock, events, command) {
                    renderer.render(state)?;
                }
            }
        }
    }

    info!("Session ended with score {}", state.score());
    Ok(())
}

fn on_tick<C: Clock>(state: &mut GameState, clock: &mut C, events: &EventLogger) {
    let outcome = state.tick();

    if let Some(cell) = outcome.ate {
        events.log_food_eaten(cell, state.score());
    }

    if let Some(interval) = outcome.new_interval {
        debug!("Speeding up to {}ms per tick", interval.as_millis());
        clock.set_period(interval);
        events.log_speed(interval);
    }

    if let Some(reason) = outcome.game_over {
        info!("Game over ({:?}), score {}", reason, state.score());
        clock.stop();
        events.log_game_over(reason, state.score());
    }
}

/// Apply a command. Returns whether the frame needs redrawing.
fn on_command<C: Clock>(
    state: &mut GameState,
    clock: &mut C,
    events: &EventLogger,
    command: Command,
) -> bool {
    match command {
        Command::Turn(heading) => {
            if state.set_heading(heading) {
                debug!("Heading changed to {:?}", heading);
                events.log_direction(heading);
            }
            false
        }
        Command::TogglePause => {
            if state.status() == GameStatus::Over {
                return false;
            }
            let paused = state.toggle_pause() == GameStatus::Paused;
            if paused {
                clock.stop();
            } else {
                clock.start();
            }
            events.log_pause(paused);
            true
        }
        Command::Restart => {
            if state.status() != GameStatus::Over {
                return false;
            }
            state.reset();
            clock.set_period(state.tick_interval());
            clock.start();
            info!("Game restarted");
            events.log_restart();
            true
        }
        Command::Quit => false,
    }
}
