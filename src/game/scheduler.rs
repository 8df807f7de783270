use std::time::{Duration, Instant};

use super::config::{GameConfig, PacingMode};
use super::engine::GameEngine;
use super::state::Resolution;
use crate::render::{paint, RenderSurface};

/// When a display frame turns into a simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Every `every`-th frame. Tick rate follows the display refresh rate.
    FrameCount { every: u32 },
    /// Whenever `tick` of wall clock has built up, at most one tick per frame
    Elapsed { tick: Duration },
}

impl Pacing {
    pub fn from_config(config: &GameConfig) -> Self {
        match config.pacing {
            PacingMode::Frames => Pacing::FrameCount {
                every: config.tick_every,
            },
            PacingMode::Elapsed => Pacing::Elapsed {
                tick: Duration::from_secs_f64(
                    f64::from(config.tick_every) / f64::from(config.frame_rate),
                ),
            },
        }
    }
}

/// Called once per display frame; ticks and repaints on the paced frames
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    pacing: Pacing,
    counter: u32,
    accumulated: Duration,
    last_frame: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            counter: 0,
            accumulated: Duration::ZERO,
            last_frame: None,
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Handle one display frame.
    ///
    /// Returns the tick's resolution when a tick ran (and the surface was
    /// repainted), `None` on frames that only advance the pacing state.
    pub fn on_frame<S: RenderSurface + ?Sized>(
        &mut self,
        engine: &mut GameEngine,
        surface: &mut S,
    ) -> Option<Resolution> {
        self.on_frame_at(Instant::now(), engine, surface)
    }

    /// [`FrameScheduler::on_frame`] with an explicit frame timestamp
    pub fn on_frame_at<S: RenderSurface + ?Sized>(
        &mut self,
        now: Instant,
        engine: &mut GameEngine,
        surface: &mut S,
    ) -> Option<Resolution> {
        if !self.is_due(now) {
            return None;
        }

        let resolution = engine.tick();
        paint(engine.state(), surface);
        Some(resolution)
    }

    fn is_due(&mut self, now: Instant) -> bool {
        match self.pacing {
            Pacing::FrameCount { every } => {
                self.counter += 1;
                if self.counter < every {
                    return false;
                }
                self.counter = 0;
                true
            }
            Pacing::Elapsed { tick } => {
                let previous = self.last_frame.replace(now).unwrap_or(now);
                self.accumulated += now.saturating_duration_since(previous);
                if self.accumulated < tick {
                    return false;
                }
                self.accumulated -= tick;
                // No catch-up bursts after a stall
                if self.accumulated >= tick {
                    self.accumulated = Duration::ZERO;
                }
                true
            }
        }
    }
}
