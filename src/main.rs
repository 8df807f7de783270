use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wrapsnake::game::{GameConfig, PacingMode};
use wrapsnake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "wrapsnake")]
#[command(version, about = "Snake on a wrapping grid")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of columns
    #[arg(long)]
    cols: Option<i32>,

    /// Number of rows
    #[arg(long)]
    rows: Option<i32>,

    /// Cell size in board units
    #[arg(long)]
    cell_size: Option<i32>,

    /// Advance the snake once every N frames
    #[arg(long)]
    tick_every: Option<u32>,

    /// Frames per second of the frame loop
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for target placement
    #[arg(long)]
    seed: Option<u64>,

    /// How frames are turned into ticks
    #[arg(long)]
    pacing: Option<PacingArg>,

    /// Write logs here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum PacingArg {
    /// Count frames (tick rate follows the refresh rate)
    Frames,
    /// Accumulate wall-clock time between frames
    Elapsed,
}

impl From<PacingArg> for PacingMode {
    fn from(arg: PacingArg) -> Self {
        match arg {
            PacingArg::Frames => PacingMode::Frames,
            PacingArg::Elapsed => PacingMode::Elapsed,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if self.cols.is_some() || self.rows.is_some() || self.cell_size.is_some() {
            config.fit_to_board();
        }
        if let Some(tick_every) = self.tick_every {
            config.tick_every = tick_every;
        }
        if let Some(fps) = self.fps {
            config.frame_rate = fps;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(pacing) = self.pacing.clone() {
            config.pacing = pacing.into();
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

// The terminal owns stdout/stderr while playing, so logs only go to a file.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("Failed to install log subscriber: {err}"))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_file) = &cli.log_file {
        init_tracing(log_file)?;
    }

    let config = cli.game_config()?;
    info!(?config, "configuration loaded");

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}
