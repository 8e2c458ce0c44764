use std::cell::Cell;
use std::time::Duration;

use sapling_core::Clock;

/// Clock that only moves when told to; `sleep` advances it instantly.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    slept: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Total time spent in `sleep`.
    pub fn total_slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.slept.set(self.slept.get() + duration);
        self.advance(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_advances_time_and_is_tallied() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(5));
        clock.sleep(Duration::from_millis(11));
        assert_eq!(clock.now(), Duration::from_millis(16));
        assert_eq!(clock.total_slept(), Duration::from_millis(11));
    }
}
