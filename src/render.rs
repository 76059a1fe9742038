//! Renderer abstraction and a plain-text implementation

use std::io::{self, Write};

use crate::game::{Cell, GameState, GameStatus};

/// Draws the game after every change
pub trait Renderer {
    fn render(&mut self, state: &GameState) -> io::Result<()>;
}

/// Overlay text for the current status
pub fn status_lines(state: &GameState) -> Vec<String> {
    match state.status() {
        GameStatus::Over => vec![
            format!("Game Over! Score: {}", state.score()),
            "Press 'R' to Restart".to_string(),
        ],
        GameStatus::Paused => vec!["Paused".to_string()],
        GameStatus::Running => vec![format!("Score: {}", state.score())],
    }
}

/// Draws the board as ASCII text: `@` head, `o` body, `*` food, `.` empty
pub struct TextRenderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: false,
        }
    }

    /// Emit an ANSI clear before each frame
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn glyph(state: &GameState, cell: Cell) -> char {
        if state.head() == cell {
            '@'
        } else if state.body().contains(&cell) {
            'o'
        } else if state.food() == cell {
            '*'
        } else {
            '.'
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        let grid = state.grid();
        let mut frame = String::with_capacity(grid.cell_count() + grid.rows as usize + 64);

        if self.clear_screen {
            frame.push_str("\x1b[2J\x1b[H");
        }

        for line in status_lines(state) {
            frame.push_str(&line);
            frame.push('\n');
        }

        for row in 0..grid.rows {
            for column in 0..grid.columns {
                frame.push(Self::glyph(state, Cell::new(column, row)));
            }
            frame.push('\n');
        }

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
