//! Grid cells and board bounds

use serde::{Deserialize, Serialize};
use std::hash::Hash;

use super::direction::Heading;

/// A position on the game grid, in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

impl Cell {
    /// Create a new cell
    pub fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Get the cell one step away in the given heading.
    /// No wrapping: the result may lie outside the grid.
    pub fn adjacent(&self, heading: Heading) -> Cell {
        let (dx, dy) = heading.velocity();
        Cell::new(self.column + dx, self.row + dy)
    }
}

/// Board dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: i32,
    pub rows: i32,
}

impl Grid {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    /// Grid that fits a pixel board of the given tile size
    pub fn from_board(board_width: i32, board_height: i32, tile_size: i32) -> Self {
        Self::new(board_width / tile_size, board_height / tile_size)
    }

    pub fn cell_count(&self) -> usize {
        (self.columns.max(0) as usize) * (self.rows.max(0) as usize)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.column >= 0 && cell.column < self.columns && cell.row >= 0 && cell.row < self.rows
    }
}
