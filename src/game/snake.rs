//! Snake entity: a head cell followed by body segments

use super::direction::Heading;
use super::location::Cell;

/// The player's snake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Cell the head occupies
    head: Cell,
    /// Body segments, nearest to the head first
    body: Vec<Cell>,
}

impl Snake {
    /// Create a snake with only a head
    pub fn new(head: Cell) -> Self {
        Self {
            head,
            body: Vec::new(),
        }
    }

    /// Create a snake with the given body, nearest segment first
    pub fn with_body(head: Cell, body: Vec<Cell>) -> Self {
        Self { head, body }
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    /// Body segments without the head
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    /// Number of body segments (the score)
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// All occupied cells, head first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Check whether any part of the snake covers `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Check whether the head sits on one of the body segments
    pub fn head_hits_body(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Append a tail segment at `cell`
    pub fn grow_at(&mut self, cell: Cell) {
        self.body.push(cell);
    }

    /// Move one step: each segment takes its predecessor's cell, then the head moves
    pub fn advance(&mut self, heading: Heading) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        if let Some(first) = self.body.first_mut() {
            *first = self.head;
        }

        self.head = self.head.adjacent(heading);
    }

    /// Put the snake back to a bare head at `head`
    pub fn reset(&mut self, head: Cell) {
        self.head = head;
        self.body.clear();
    }
}
