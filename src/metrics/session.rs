use std::time::{Duration, Instant};

use crate::game::Resolution;

/// Running totals for one play session, shown in the header
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub resets: u32,
    /// Body length after the latest tick
    pub length: usize,
    /// Longest body reached this session
    pub longest: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            resets: 0,
            length: 0,
            longest: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_tick(&mut self, resolution: Resolution, length: usize) {
        self.ticks += 1;
        if resolution.reset {
            self.resets += 1;
        }
        self.length = length;
        self.longest = self.longest.max(length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
