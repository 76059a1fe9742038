//! Game state and the per-tick update rule

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

use super::collision::{self, GameOverReason};
use super::direction::Heading;
use super::food::Food;
use super::location::{Cell, Grid};
use super::snake::Snake;
use super::speed::SpeedSchedule;
use crate::config::GameConfig;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The snake moved (false when paused or over)
    pub advanced: bool,
    /// Food cell eaten at the start of the tick
    pub ate: Option<Cell>,
    /// New tick interval if eating sped the game up
    pub new_interval: Option<Duration>,
    /// Set when this tick ended the game
    pub game_over: Option<GameOverReason>,
}

impl TickOutcome {
    /// A tick that changed nothing
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    start: Cell,
    speed: SpeedSchedule,
    snake: Snake,
    heading: Heading,
    food: Food,
    status: GameStatus,
    game_over_reason: Option<GameOverReason>,
    /// One heading change is accepted per tick
    can_change_heading: bool,
    tick_interval: Duration,
    rng: StdRng,
}

impl GameState {
    /// Create a game from a validated config
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a game with reproducible food placement
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let grid = config.grid();
        let start = config.start_cell();
        let speed = SpeedSchedule::from_config(config);
        let snake = Snake::new(start);
        let food = Food::place(&mut rng, &grid, &snake);

        Self {
            grid,
            start,
            speed,
            snake,
            heading: Heading::Right,
            food,
            status: GameStatus::Running,
            game_over_reason: None,
            can_change_heading: true,
            tick_interval: speed.initial,
            rng,
        }
    }

    // ─────────────────────────────────────────────────────
    // Read access for renderers
    // ─────────────────────────────────────────────────────

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    pub fn body(&self) -> &[Cell] {
        self.snake.body()
    }

    pub fn food(&self) -> Cell {
        self.food.cell
    }

    /// Food eaten so far, equal to the body length
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    /// Delay the clock should wait between ticks
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.occupies(cell)
    }

    // ─────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────

    /// Advance the game by one step. Does nothing unless running.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::idle();
        }

        let mut outcome = TickOutcome {
            advanced: true,
            ..TickOutcome::idle()
        };

        if self.food.is_at(self.snake.head()) {
            let eaten = self.food.cell;
            self.snake.grow_at(eaten);
            self.food.relocate(&mut self.rng, &self.grid, &self.snake);
            outcome.ate = Some(eaten);
            debug!(
                "Ate food at ({}, {}), score {}",
                eaten.column,
                eaten.row,
                self.snake.len()
            );

            let next = self.speed.after_growth(self.tick_interval, self.snake.len());
            if next != self.tick_interval {
                self.tick_interval = next;
                outcome.new_interval = Some(next);
            }
        }

        self.snake.advance(self.heading);

        if let Some(reason) = collision::check(&self.snake, &self.grid) {
            self.status = GameStatus::Over;
            self.game_over_reason = Some(reason);
            outcome.game_over = Some(reason);
        }

        self.can_change_heading = true;
        outcome
    }

    /// Request a new heading. Returns whether it was accepted.
    ///
    /// Rejected when the game is over, when a change was already accepted
    /// this tick, or when `heading` reverses the current one.
    pub fn set_heading(&mut self, heading: Heading) -> bool {
        if self.status == GameStatus::Over || !self.can_change_heading {
            return false;
        }
        if heading.is_opposite(&self.heading) {
            return false;
        }

        self.heading = heading;
        self.can_change_heading = false;
        true
    }

    /// Switch between running and paused. Returns the new status.
    pub fn toggle_pause(&mut self) -> GameStatus {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Over => GameStatus::Over,
        };
        self.status
    }

    /// Start a fresh game in place
    pub fn reset(&mut self) {
        self.snake.reset(self.start);
        self.heading = Heading::Right;
        self.status = GameStatus::Running;
        self.game_over_reason = None;
        self.can_change_heading = true;
        self.tick_interval = self.speed.initial;
        self.food.relocate(&mut self.rng, &self.grid, &self.snake);
    }

    // ─────────────────────────────────────────────────────
    // Test setup
    // ─────────────────────────────────────────────────────

    /// Replace the snake and heading directly
    #[doc(hidden)]
    pub fn debug_set_snake(&mut self, head: Cell, body: &[Cell], heading: Heading) {
        self.snake = Snake::with_body(head, body.to_vec());
        self.heading = heading;
    }

    /// Put the food on a specific cell
    #[doc(hidden)]
    pub fn debug_set_food(&mut self, cell: Cell) {
        self.food = Food::at(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> GameState {
        GameState::with_seed(&GameConfig::default(), 42)
    }

    #[test]
    fn test_startup_values() {
        let game = new_game();
        assert_eq!(game.head(), Cell::new(5, 5));
        assert!(game.body().is_empty());
        assert_eq!(game.heading(), Heading::Right);
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.tick_interval(), Duration::from_millis(100));
        assert!(!game.occupies(game.food()));
    }

    #[test]
    fn test_tick_moves_head() {
        let mut game = new_game();
        game.debug_set_food(Cell::new(0, 0));

        let outcome = game.tick();

        assert!(outcome.advanced);
        assert_eq!(outcome.ate, None);
        assert_eq!(game.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_one_heading_change_per_tick() {
        let mut game = new_game();
        game.debug_set_food(Cell::new(0, 0));

        assert!(game.set_heading(Heading::Up));
        assert!(!game.set_heading(Heading::Left));
        assert_eq!(game.heading(), Heading::Up);

        game.tick();
        assert!(game.set_heading(Heading::Left));
        assert_eq!(game.heading(), Heading::Left);
    }

    #[test]
    fn test_rejected_change_does_not_consume_tick() {
        let mut game = new_game();

        assert!(!game.set_heading(Heading::Left));
        assert!(game.set_heading(Heading::Down));
        assert_eq!(game.heading(), Heading::Down);
    }

    #[test]
    fn test_pause_toggle() {
        let mut game = new_game();
        assert_eq!(game.toggle_pause(), GameStatus::Paused);
        assert_eq!(game.toggle_pause(), GameStatus::Running);
    }

    #[test]
    fn test_eat_grows_and_relocates() {
        let mut game = new_game();
        game.debug_set_food(Cell::new(5, 5));

        let outcome = game.tick();

        assert_eq!(outcome.ate, Some(Cell::new(5, 5)));
        assert_eq!(game.score(), 1);
        assert_eq!(game.body(), &[Cell::new(5, 5)]);
        assert_eq!(game.head(), Cell::new(6, 5));
        assert!(!game.occupies(game.food()) || game.food() == game.head());
    }

    #[test]
    fn test_over_state_is_sticky() {
        let mut game = new_game();
        game.debug_set_snake(Cell::new(23, 5), &[], Heading::Right);
        game.debug_set_food(Cell::new(0, 0));

        let outcome = game.tick();
        assert_eq!(outcome.game_over, Some(GameOverReason::HitWall));
        assert_eq!(game.toggle_pause(), GameStatus::Over);
        assert!(!game.set_heading(Heading::Up));
    }
}
