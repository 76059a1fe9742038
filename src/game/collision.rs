//! Collision detection logic

use serde::Serialize;

use super::location::Grid;
use super::snake::Snake;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    /// Head left the grid
    HitWall,
    /// Head ran into the body
    HitSelf,
}

/// Check the head against the body and the grid bounds.
/// A self hit is reported ahead of a wall hit.
pub fn check(snake: &Snake, grid: &Grid) -> Option<GameOverReason> {
    if snake.head_hits_body() {
        return Some(GameOverReason::HitSelf);
    }

    if !grid.in_bounds(snake.head()) {
        return Some(GameOverReason::HitWall);
    }

    None
}
