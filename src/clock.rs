use std::time::{Duration, Instant};

use tokio::time::{Interval, MissedTickBehavior, interval};

/// Frame limiter for the play loop
///
/// Each [`tick`](FrameClock::tick) waits for the next frame slot and returns
/// the wall-clock time since the previous one, so the loop never runs faster
/// than the target rate.
pub struct FrameClock {
    interval: Interval,
    last: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        let mut interval = interval(frame);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            last: Instant::now(),
        }
    }

    pub async fn tick(&mut self) -> Duration {
        self.interval.tick().await;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}
