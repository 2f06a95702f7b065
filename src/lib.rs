//! Grid Snake - the classic arcade Snake game on a fixed grid
//!
//! This library provides:
//! - Core game logic with a fixed-timestep session loop (game module)
//! - Draw command lists and a terminal renderer (render module)
//! - Keyboard input mapping (input module)
//! - The interactive terminal mode (modes module)

pub mod clock;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
