use std::time::{Duration, Instant};

/// Emits simulation ticks at an externally supplied cadence.
///
/// The interval is passed in on every poll rather than stored, so the
/// caller re-derives it from the current difficulty each time and a
/// difficulty change re-times the very next firing. The scheduler knows
/// nothing about rendering or game state.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    last_fire: Instant,
}

impl TickScheduler {
    /// Creates a scheduler whose cadence starts at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { last_fire: now }
    }

    /// Returns true when `interval` has elapsed since the last firing,
    /// and marks `now` as the new firing instant.
    ///
    /// Reports at most one tick per call; time beyond one interval is
    /// dropped rather than replayed as a burst of catch-up steps.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        if now.duration_since(self.last_fire) < interval {
            return false;
        }

        self.last_fire = now;
        true
    }
}

/// One-shot deadline, used for the title screen hand-off.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    fired: bool,
}

impl Deadline {
    /// Creates a deadline `delay` from `now`.
    #[must_use]
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            at: now + delay,
            fired: false,
        }
    }

    /// Returns true exactly once, on the first poll at or past the
    /// deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.fired || now < self.at {
            return false;
        }

        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Deadline, TickScheduler};

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn scheduler_fires_only_after_the_interval() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(start);

        assert!(!scheduler.poll(start + Duration::from_millis(50), INTERVAL));
        assert!(scheduler.poll(start + INTERVAL, INTERVAL));

        // Cadence restarts from the last firing.
        assert!(!scheduler.poll(start + Duration::from_millis(150), INTERVAL));
        assert!(scheduler.poll(start + Duration::from_millis(200), INTERVAL));
    }

    #[test]
    fn shorter_interval_takes_effect_on_the_next_poll() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(start);

        assert!(!scheduler.poll(start + Duration::from_millis(60), INTERVAL));
        // Difficulty change: the same elapsed time now satisfies the
        // shorter interval.
        assert!(scheduler.poll(start + Duration::from_millis(60), Duration::from_millis(50)));
    }

    #[test]
    fn long_gaps_produce_a_single_tick() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(start);

        assert!(scheduler.poll(start + INTERVAL * 5, INTERVAL));
        assert!(!scheduler.poll(start + INTERVAL * 5, INTERVAL));
    }

    #[test]
    fn deadline_fires_exactly_once() {
        let start = Instant::now();
        let mut deadline = Deadline::after(start, Duration::from_secs(3));

        assert!(!deadline.poll(start + Duration::from_secs(2)));
        assert!(deadline.poll(start + Duration::from_secs(3)));
        assert!(!deadline.poll(start + Duration::from_secs(4)));
    }
}
