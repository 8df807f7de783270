//! Wrapsnake - Snake on a wrapping grid
//!
//! This library provides:
//! - Core game logic and frame pacing (game module)
//! - The render surface contract and terminal renderer (render module)
//! - Keyboard mapping (input module)
//! - Session counters (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
