use std::time::{Duration, Instant};

use crate::game::{FrameOutcome, ResetCause};

/// In-memory counters for the current run, shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub food_eaten: u32,
    pub resets: u32,
    pub longest_snake: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            food_eaten: 0,
            resets: 0,
            longest_snake: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold a frame's outcome and the resulting snake length into the totals
    pub fn record(&mut self, outcome: &FrameOutcome, snake_len: usize) {
        self.food_eaten += outcome.food_eaten;
        if matches!(
            outcome.reset,
            Some(ResetCause::Bounds | ResetCause::SelfCollision)
        ) {
            self.resets += 1;
        }
        self.longest_snake = self.longest_snake.max(snake_len);
    }

    /// Manual restart: the clock starts over, totals are kept
    pub fn on_restart(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
