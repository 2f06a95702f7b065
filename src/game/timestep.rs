use std::time::Duration;

/// Fixed-timestep accumulator
///
/// Frame time is added with [`accumulate`](Self::accumulate) and whole ticks
/// are drained with [`consume_tick`](Self::consume_tick); any remainder is
/// carried into the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Timestep {
    tick: Duration,
    accumulated: Duration,
}

impl Timestep {
    /// `tick` must be non-zero
    pub fn new(tick: Duration) -> Self {
        debug_assert!(!tick.is_zero(), "tick duration must be non-zero");
        Self {
            tick,
            accumulated: Duration::ZERO,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulated = self.accumulated.saturating_add(elapsed);
    }

    /// Take one tick out of the accumulator if a whole tick is available
    pub fn consume_tick(&mut self) -> bool {
        if self.accumulated >= self.tick {
            self.accumulated -= self.tick;
            true
        } else {
            false
        }
    }
}
