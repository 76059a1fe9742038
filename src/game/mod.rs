//! Game module

pub mod collision;
pub mod direction;
pub mod food;
pub mod location;
pub mod snake;
pub mod speed;
pub mod state;

pub use collision::GameOverReason;
pub use direction::Heading;
pub use food::Food;
pub use location::{Cell, Grid};
pub use snake::Snake;
pub use speed::SpeedSchedule;
pub use state::{GameState, GameStatus, TickOutcome};
