use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::direction::Direction;
use super::state::GridCell;

/// How the frame scheduler turns display frames into simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PacingMode {
    /// Tick on every `tick_every`-th frame
    #[default]
    Frames,
    /// Tick whenever `tick_every / frame_rate` seconds of wall clock have passed
    Elapsed,
}

/// Largest board accepted, in cells
pub const MAX_BOARD_CELLS: i64 = 256 * 256;

/// Fastest frame loop accepted, in frames per second
pub const MAX_FRAME_RATE: u32 = 1000;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell_size must be positive, got {0}")]
    CellSize(i32),
    #[error("board must have at least one column and one row, got {cols}x{rows}")]
    EmptyBoard { cols: i32, rows: i32 },
    #[error("initial_length must be at least 1")]
    InitialLength,
    #[error("tick_every must be at least 1")]
    TickEvery,
    #[error("frame_rate must be between 1 and {max}, got {0}", max = MAX_FRAME_RATE)]
    FrameRate(u32),
    #[error("a {cols}x{rows} board of {cell_size}-unit cells is too large")]
    BoardTooLarge { cols: i32, rows: i32, cell_size: i32 },
    #[error("{name} ({x}, {y}) is not an aligned cell on a {width}x{height} board")]
    OffGrid {
        name: &'static str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of one cell in board units
    pub cell_size: i32,
    /// Number of columns on the board
    pub cols: i32,
    /// Number of rows on the board
    pub rows: i32,
    /// Body length the snake grows to after a (re)start
    pub initial_length: usize,
    /// Simulation ticks once every this many frames
    pub tick_every: u32,
    /// Display frames per second driven by the host loop
    pub frame_rate: u32,
    /// Head position after a (re)start
    pub start: GridCell,
    /// Direction after a (re)start
    pub initial_direction: Direction,
    /// Target position at launch; `None` picks a random cell
    pub initial_target: Option<GridCell>,
    pub pacing: PacingMode,
    /// Seed for target placement; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            cols: 20,
            rows: 20,
            initial_length: 4,
            tick_every: 4,
            frame_rate: 60,
            start: GridCell::new(160, 160),
            initial_direction: Direction::Right,
            initial_target: Some(GridCell::new(320, 320)),
            pacing: PacingMode::Frames,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size in cells
    pub fn new(cols: i32, rows: i32) -> Self {
        let mut config = Self {
            cols,
            rows,
            ..Default::default()
        };
        config.fit_to_board();
        config
    }

    /// Pull the start and initial target back onto the board after a resize.
    ///
    /// An off-board start moves to the middle cell and an off-board initial
    /// target becomes a random pick. Boards that `validate` would reject for
    /// their size are left untouched.
    pub fn fit_to_board(&mut self) {
        if self.cell_size <= 0 || self.cols <= 0 || self.rows <= 0 {
            return;
        }
        let Some((width, height)) = self.extent() else {
            return;
        };

        if !self.is_board_cell(self.start, width, height) {
            self.start = GridCell::new(
                self.cols / 2 * self.cell_size,
                self.rows / 2 * self.cell_size,
            );
        }
        if let Some(target) = self.initial_target {
            if !self.is_board_cell(target, width, height) {
                self.initial_target = None;
            }
        }
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Board width in board units. Only meaningful on a validated config.
    pub fn width(&self) -> i32 {
        self.cols * self.cell_size
    }

    /// Board height in board units. Only meaningful on a validated config.
    pub fn height(&self) -> i32 {
        self.rows * self.cell_size
    }

    /// Board width and height in board units, `None` if they overflow
    fn extent(&self) -> Option<(i32, i32)> {
        Some((
            self.cols.checked_mul(self.cell_size)?,
            self.rows.checked_mul(self.cell_size)?,
        ))
    }

    fn is_board_cell(&self, cell: GridCell, width: i32, height: i32) -> bool {
        let aligned = cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0;
        aligned && (0..width).contains(&cell.x) && (0..height).contains(&cell.y)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.cols <= 0 || self.rows <= 0 {
            return Err(ConfigError::EmptyBoard {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.initial_length == 0 {
            return Err(ConfigError::InitialLength);
        }
        if self.tick_every == 0 {
            return Err(ConfigError::TickEvery);
        }
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::FrameRate(self.frame_rate));
        }

        let too_large = ConfigError::BoardTooLarge {
            cols: self.cols,
            rows: self.rows,
            cell_size: self.cell_size,
        };
        if i64::from(self.cols) * i64::from(self.rows) > MAX_BOARD_CELLS {
            return Err(too_large);
        }
        // Leaves room for a head one cell past the far edge before wrapping
        let (width, height) = match self.extent() {
            Some((width, height))
                if width.checked_add(self.cell_size).is_some()
                    && height.checked_add(self.cell_size).is_some() =>
            {
                (width, height)
            }
            _ => return Err(too_large),
        };

        self.check_cell("start", self.start, width, height)?;
        if let Some(target) = self.initial_target {
            self.check_cell("initial_target", target, width, height)?;
        }
        Ok(())
    }

    fn check_cell(
        &self,
        name: &'static str,
        cell: GridCell,
        width: i32,
        height: i32,
    ) -> Result<(), ConfigError> {
        if self.is_board_cell(cell, width, height) {
            Ok(())
        } else {
            Err(ConfigError::OffGrid {
                name,
                x: cell.x,
                y: cell.y,
                width,
                height,
            })
        }
    }
}
