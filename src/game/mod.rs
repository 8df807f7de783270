//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal I/O. The
//! scheduler paints through the [`crate::render::RenderSurface`] trait, so
//! any host that can fill squares can drive it.

pub mod config;
pub mod direction;
pub mod engine;
pub mod picker;
pub mod scheduler;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig, PacingMode};
pub use direction::{Direction, DirectionController};
pub use engine::GameEngine;
pub use picker::CellPicker;
pub use scheduler::{FrameScheduler, Pacing};
pub use state::{Board, GridCell, Resolution, SimulationState, Snake};
