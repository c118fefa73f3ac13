/// Interval timer for playlist transitions.
///
/// Time is host milliseconds (e.g. `performance.now()`). The timer is due
/// once strictly more than `interval_ms` has passed since the last
/// transition. Physics does not read it: motion is per frame, not per second.
#[derive(Debug, Clone)]
pub struct TransitionTimer {
    interval_ms: f64,
    last_ms: f64,
}

impl TransitionTimer {
    /// A timer whose clock starts at zero.
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: 0.0,
        }
    }

    /// Whether the interval has elapsed at `now_ms`.
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.last_ms > self.interval_ms
    }

    /// Record a transition at `now_ms`. Supersedes any pending firing.
    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }

    pub fn last_transition(&self) -> f64 {
        self.last_ms
    }
}
