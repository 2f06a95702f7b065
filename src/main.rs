use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::logging::init_file_logger;
use grid_snake::modes::PlayMode;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic Snake on a fixed grid")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Snake speed in cells per second
    #[arg(long)]
    speed: Option<f64>,

    /// Frame rate cap
    #[arg(long)]
    fps: Option<u32>,

    /// Cell size in pixels, passed on to the renderer
    #[arg(long)]
    cell_size: Option<u32>,

    /// Reset when the snake runs into its own body
    #[arg(long)]
    self_collision: bool,

    /// Ignore 180-degree turns
    #[arg(long)]
    forbid_reverse: bool,

    /// Show the body cell list under the grid
    #[arg(long)]
    debug_overlay: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    /// File config (or defaults) with command line overrides applied
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.self_collision |= self.self_collision;
        config.forbid_reverse |= self.forbid_reverse;
        config.debug_overlay |= self.debug_overlay;

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_file_logger(&cli.log_file, cli.log_level.into())?;

    let config = cli.game_config()?;
    log::info!("starting with {:?}", config);

    let mut play = PlayMode::new(config)?;
    play.run().await?;

    Ok(())
}
