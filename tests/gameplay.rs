use std::time::Duration;

use snake_game::{Cell, GameConfig, GameOverReason, GameState, GameStatus, Heading};

fn new_game(seed: u64) -> GameState {
    let mut game = GameState::with_seed(&GameConfig::default(), seed);
    // Keep food out of the way unless a test places it
    game.debug_set_food(Cell::new(0, 23));
    game
}

fn snapshot(game: &GameState) -> (Cell, Vec<Cell>, Cell, Heading, GameStatus, Duration) {
    (
        game.head(),
        game.body().to_vec(),
        game.food(),
        game.heading(),
        game.status(),
        game.tick_interval(),
    )
}

#[test]
fn paused_and_over_ticks_change_nothing() {
    let mut game = new_game(1);
    game.toggle_pause();
    let before = snapshot(&game);
    for _ in 0..10 {
        assert!(!game.tick().advanced);
    }
    assert_eq!(snapshot(&game), before);

    game.toggle_pause();
    game.debug_set_snake(Cell::new(23, 5), &[], Heading::Right);
    game.tick();
    assert_eq!(game.status(), GameStatus::Over);

    let before = snapshot(&game);
    for _ in 0..10 {
        assert!(!game.tick().advanced);
    }
    assert_eq!(snapshot(&game), before);
}

#[test]
fn length_tracks_food_eaten() {
    let mut game = new_game(2);

    for eaten in 1..=10 {
        game.debug_set_food(game.head());
        let outcome = game.tick();
        assert!(outcome.ate.is_some());
        assert_eq!(game.score(), eaten);
        assert_eq!(game.body().len(), eaten);
        assert_eq!(game.status(), GameStatus::Running);
    }
}

#[test]
fn moving_into_own_body_ends_game() {
    let mut game = new_game(3);
    // Coiled snake heading right, about to hit the segment at (5, 5)
    game.debug_set_snake(
        Cell::new(4, 5),
        &[Cell::new(4, 4), Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)],
        Heading::Right,
    );

    let outcome = game.tick();

    assert_eq!(game.head(), Cell::new(5, 5));
    assert_eq!(outcome.game_over, Some(GameOverReason::HitSelf));
    assert_eq!(game.status(), GameStatus::Over);
}

#[test]
fn three_segment_body_ahead_of_head_is_hit() {
    let mut game = new_game(4);
    game.debug_set_snake(
        Cell::new(4, 5),
        &[Cell::new(5, 5), Cell::new(6, 5), Cell::new(7, 5)],
        Heading::Right,
    );

    game.tick();

    assert_eq!(game.game_over_reason(), Some(GameOverReason::HitSelf));
}

#[test]
fn food_never_lands_on_snake_body() {
    let mut game = new_game(5);

    for _ in 0..12 {
        let eaten = game.head();
        game.debug_set_food(eaten);
        let outcome = game.tick();
        assert_eq!(outcome.ate, Some(eaten));
        assert!(!game.body().contains(&game.food()));
        assert!(game.grid().in_bounds(game.food()));
    }
}

#[test]
fn reversal_is_rejected() {
    let mut game = new_game(6);
    assert_eq!(game.heading(), Heading::Right);

    assert!(!game.set_heading(Heading::Left));
    assert_eq!(game.heading(), Heading::Right);
}

#[test]
fn speed_schedule_follows_score() {
    let mut game = new_game(7);
    assert_eq!(game.tick_interval(), Duration::from_millis(100));

    for _ in 0..4 {
        game.debug_set_food(game.head());
        let outcome = game.tick();
        assert_eq!(outcome.new_interval, None);
    }
    game.debug_set_food(game.head());
    let outcome = game.tick();
    assert_eq!(outcome.new_interval, Some(Duration::from_millis(95)));
    assert_eq!(game.tick_interval(), Duration::from_millis(95));
}

#[test]
fn speed_never_drops_below_floor() {
    let config = GameConfig {
        initial_tick_ms: 60,
        speedup_every: 1,
        ..GameConfig::default()
    };
    let mut game = GameState::with_seed(&config, 8);

    let mut seen = Vec::new();
    for _ in 0..4 {
        game.debug_set_food(game.head());
        game.tick();
        seen.push(game.tick_interval().as_millis());
    }

    assert_eq!(seen, vec![55, 50, 50, 50]);
}

#[test]
fn leaving_right_edge_ends_game() {
    let mut game = new_game(9);
    game.debug_set_snake(Cell::new(23, 10), &[Cell::new(22, 10)], Heading::Right);

    let outcome = game.tick();

    assert_eq!(outcome.game_over, Some(GameOverReason::HitWall));
    assert_eq!(game.status(), GameStatus::Over);
}

#[test]
fn opening_run_eats_food_on_start_row() {
    let mut game = new_game(10);
    assert_eq!(game.grid().columns, 24);
    assert_eq!(game.grid().rows, 24);
    game.debug_set_food(Cell::new(10, 5));

    for _ in 0..5 {
        game.tick();
    }
    assert_eq!(game.head(), Cell::new(10, 5));
    assert_eq!(game.score(), 0);

    let outcome = game.tick();
    assert_eq!(outcome.ate, Some(Cell::new(10, 5)));
    assert_eq!(game.score(), 1);
    assert_eq!(game.body(), &[Cell::new(10, 5)]);
    assert_ne!(game.food(), Cell::new(10, 5));
}

#[test]
fn reset_restores_startup_values() {
    let mut game = new_game(11);
    for _ in 0..5 {
        game.debug_set_food(game.head());
        game.tick();
    }
    let body = game.body().to_vec();
    game.debug_set_snake(Cell::new(5, 23), &body, Heading::Down);
    game.tick();
    assert_eq!(game.status(), GameStatus::Over);

    game.reset();

    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.game_over_reason(), None);
    assert_eq!(game.head(), Cell::new(5, 5));
    assert!(game.body().is_empty());
    assert_eq!(game.heading(), Heading::Right);
    assert_eq!(game.tick_interval(), Duration::from_millis(100));
    assert!(!game.occupies(game.food()));
    assert!(game.set_heading(Heading::Up));
}
