//! Food entity - placed on a random free cell

use rand::Rng;

use super::location::{Cell, Grid};
use super::snake::Snake;

/// The food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    /// Position of the food
    pub cell: Cell,
}

impl Food {
    /// Create food at a specific cell
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    /// Place food on a random cell the snake does not cover.
    ///
    /// Rejection sampling: never returns if the snake fills the whole grid.
    pub fn place<R: Rng>(rng: &mut R, grid: &Grid, snake: &Snake) -> Self {
        loop {
            let cell = Cell::new(rng.gen_range(0..grid.columns), rng.gen_range(0..grid.rows));
            if !snake.occupies(cell) {
                return Self { cell };
            }
        }
    }

    /// Move the food to a new random free cell
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, grid: &Grid, snake: &Snake) {
        *self = Self::place(rng, grid, snake);
    }

    /// Check if a cell matches the food position
    pub fn is_at(&self, cell: Cell) -> bool {
        self.cell == cell
    }
}
