use std::time::{Duration, Instant};

/// Single-shot tick timer that the session re-arms after every tick.
///
/// At most one deadline is outstanding. Callers pass the current instant in,
/// which keeps the timer independent of any particular event loop.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Schedules the next fire one full interval after `now`, replacing any
    /// outstanding deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Drops the outstanding deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the deadline when it has passed. Returns true on fire.
    ///
    /// Fires at most once per arming; a late poll does not produce catch-up
    /// ticks.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, or `None` when idle.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickTimer;

    const INTERVAL: Duration = Duration::from_millis(120);

    #[test]
    fn fires_once_after_the_interval() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL);
        timer.arm(start);

        assert!(!timer.fire_if_due(start + Duration::from_millis(119)));
        assert!(timer.fire_if_due(start + INTERVAL));
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(start + INTERVAL * 5));
    }

    #[test]
    fn cancel_clears_the_deadline() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL);
        timer.arm(start);
        timer.cancel();

        assert!(!timer.is_armed());
        assert_eq!(timer.time_until_due(start), None);
        assert!(!timer.fire_if_due(start + INTERVAL));
    }

    #[test]
    fn rearming_replaces_the_deadline() {
        let start = Instant::now();
        let later = start + Duration::from_millis(500);
        let mut timer = TickTimer::new(INTERVAL);
        timer.arm(start);
        timer.arm(later);

        assert_eq!(timer.time_until_due(later), Some(INTERVAL));
        assert!(!timer.fire_if_due(start + INTERVAL));
        assert!(timer.fire_if_due(later + INTERVAL));
    }
}
