//! Single-slot deadline timers polled from the run loop

use std::time::{Duration, Instant};

/// A one-shot timer holding at most one pending deadline.
///
/// Scheduling replaces whatever was pending, so a superseded deadline can
/// never fire. Time is passed in by the caller; the run loop feeds
/// `Instant::now()` and tests feed synthetic instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Schedule the timer to fire `delay` after `now`, dropping any earlier deadline
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed.
    ///
    /// Returns `true` exactly once per `schedule`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_default_is_idle() {
        let mut timer = Timer::default();
        assert!(!timer.is_pending());
        assert!(!timer.fire(Instant::now()));
    }

    #[test]
    fn test_fires_once_when_due() {
        let start = Instant::now();
        let mut timer = Timer::default();
        timer.schedule(start, SECOND);

        assert!(!timer.fire(start));
        assert!(timer.fire(start + SECOND));
        assert!(!timer.fire(start + SECOND * 2));
    }

    #[test]
    fn test_reschedule_supersedes_earlier_deadline() {
        let start = Instant::now();
        let mut timer = Timer::default();
        timer.schedule(start, SECOND * 5);
        timer.schedule(start + SECOND * 3, SECOND * 5);

        // The first deadline would have been at +5s
        assert!(!timer.fire(start + SECOND * 5));
        assert!(timer.fire(start + SECOND * 8));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = Timer::default();
        timer.schedule(start, SECOND);
        timer.cancel();

        assert!(!timer.is_pending());
        assert!(!timer.fire(start + SECOND * 10));
    }
}
