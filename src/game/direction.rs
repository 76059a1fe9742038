//! Heading enum for snake movement

use serde::{Deserialize, Serialize};

/// Direction of movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// Moving up (row decreases)
    Up,
    /// Moving down (row increases)
    Down,
    /// Moving left
    Left,
    /// Moving right
    #[default]
    Right,
}

impl Heading {
    /// Parse heading from a key name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "north" | "w" => Some(Heading::Up),
            "down" | "south" | "s" => Some(Heading::Down),
            "left" | "west" | "a" => Some(Heading::Left),
            "right" | "east" | "d" => Some(Heading::Right),
            _ => None,
        }
    }

    /// Unit velocity as (dx, dy)
    pub fn velocity(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Check if this heading is the exact reverse of another
    pub fn is_opposite(&self, other: &Heading) -> bool {
        self.opposite() == *other
    }
}
