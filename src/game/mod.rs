//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. A [`GameSession`] is driven one frame at a time with the
//! elapsed time and an optional direction command.

pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod grid;
pub mod session;
pub mod snake;
pub mod timestep;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use error::GameError;
pub use food::FoodSpawner;
pub use grid::{Cell, Grid};
pub use session::{FrameOutcome, GameSession, ResetCause};
pub use snake::Snake;
pub use timestep::Timestep;
