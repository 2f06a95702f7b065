use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Send `log` records to `path`; the terminal itself belongs to the game
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {:?}", path))?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;
    Ok(())
}
