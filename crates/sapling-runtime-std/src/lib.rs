//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides the real-time [`Clock`] used outside tests and the
//! fixed-rate [`FrameThrottle`] the app shell paces frames with.

use std::time::{Duration, Instant};

use sapling_core::Clock;

/// Clock implementation backed by [`std::time`].
#[derive(Debug, Clone)]
pub struct StdClock {
    start: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Paces a loop at a fixed number of frames per second.
///
/// Frame deadlines are counted from a base time rather than from the
/// previous frame, so short frames do not accumulate drift. When a frame
/// overruns its deadline the throttle re-bases on the current time instead
/// of trying to catch up.
#[derive(Debug)]
pub struct FrameThrottle<C: Clock> {
    clock: C,
    period: Duration,
    base: Duration,
    frame_count: u32,
}

impl<C: Clock> FrameThrottle<C> {
    /// `fps` is clamped to at least one frame per second.
    pub fn new(clock: C, fps: u32) -> Self {
        let base = clock.now();
        Self {
            clock,
            period: Duration::from_secs(1) / fps.max(1),
            base,
            frame_count: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Sleeps until the next frame deadline and returns the time slept.
    pub fn delay(&mut self) -> Duration {
        self.frame_count += 1;
        let now = self.clock.now();
        let target = self.base + self.period * self.frame_count;
        if now <= target {
            let wait = target - now;
            self.clock.sleep(wait);
            wait
        } else {
            log::trace!("frame late by {:?}, re-basing", now - target);
            self.frame_count = 0;
            self.base = now;
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use sapling_testing::ManualClock;

    use super::*;

    #[test]
    fn delay_sleeps_until_next_deadline() {
        let clock = Rc::new(ManualClock::new());
        let mut throttle = FrameThrottle::new(clock.clone(), 50);
        assert_eq!(throttle.period(), Duration::from_millis(20));

        clock.advance(Duration::from_millis(5));
        assert_eq!(throttle.delay(), Duration::from_millis(15));
        assert_eq!(clock.now(), Duration::from_millis(20));

        clock.advance(Duration::from_millis(12));
        assert_eq!(throttle.delay(), Duration::from_millis(8));
        assert_eq!(clock.now(), Duration::from_millis(40));
    }

    #[test]
    fn late_frame_rebases_without_catching_up() {
        let clock = Rc::new(ManualClock::new());
        let mut throttle = FrameThrottle::new(clock.clone(), 50);

        clock.advance(Duration::from_millis(70));
        assert_eq!(throttle.delay(), Duration::ZERO);

        clock.advance(Duration::from_millis(5));
        assert_eq!(throttle.delay(), Duration::from_millis(15));
        assert_eq!(clock.total_slept(), Duration::from_millis(15));
    }

    #[test]
    fn std_clock_is_monotonic() {
        let clock = StdClock::new();
        let first = clock.now();
        clock.sleep(Duration::from_millis(1));
        assert!(clock.now() >= first + Duration::from_millis(1));
    }
}
