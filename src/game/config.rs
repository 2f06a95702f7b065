use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Largest grid side accepted, in cells
pub const MAX_GRID_SIDE: usize = 255;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Snake speed in cells per second
    pub speed: f64,
    /// Frame rate cap of the outer loop
    pub target_fps: u32,
    /// Side of one cell in pixels, for pixel-space renderers
    pub cell_size: u32,

    /// Reset the snake when its head runs into its own body
    pub self_collision: bool,
    /// Ignore a direction that reverses travel of a snake longer than 1
    pub forbid_reverse: bool,
    /// Emit a text overlay listing the body cells
    pub debug_overlay: bool,
    /// Fixed RNG seed for food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            speed: 10.0,
            target_fps: 60,
            cell_size: 32,
            self_collision: false,
            forbid_reverse: false,
            debug_overlay: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file; missing fields keep defaults
    pub fn from_json_file(path: &Path) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(GameError::InvalidConfig(format!(
                "grid sides are limited to {} cells, got {}x{}",
                MAX_GRID_SIDE, self.grid_width, self.grid_height
            )));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "speed must be a positive number of cells per second, got {}",
                self.speed
            )));
        }
        let tick = Duration::try_from_secs_f64(1.0 / self.speed).map_err(|_| {
            GameError::InvalidConfig(format!("speed {} is too slow", self.speed))
        })?;
        if tick < Duration::from_millis(1) {
            return Err(GameError::InvalidConfig(format!(
                "speed {} is above the limit of 1000 cells per second",
                self.speed
            )));
        }
        if self.target_fps == 0 {
            return Err(GameError::InvalidConfig("target_fps must be > 0".into()));
        }
        if self.cell_size == 0 {
            return Err(GameError::InvalidConfig("cell_size must be > 0".into()));
        }
        Ok(())
    }

    /// Time between two snake moves (`1 / speed` seconds).
    ///
    /// Panics on a speed that [`validate`](Self::validate) rejects.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps))
    }
}
