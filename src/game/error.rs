use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the game core
#[derive(Debug, Error)]
pub enum GameError {
    /// Every cell of the grid is occupied, so no food can be placed
    #[error("grid is full: no free cell left for food")]
    GridFull,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path:?}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
