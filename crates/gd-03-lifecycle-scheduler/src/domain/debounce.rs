//! Debounce window.
//!
//! Pure deadline bookkeeping. The service decides *when* to call these
//! methods; nothing here sleeps.

use std::time::Duration;
use tokio::time::Instant;

#[derive(Clone, Debug)]
pub struct DebounceWindow {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceWindow {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Pushes the deadline to `now + delay`, replacing any earlier one.
    pub fn rearm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Disarms and returns true if the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn test_unarmed_never_due() {
        let window = DebounceWindow::new(DELAY);
        assert!(!window.is_armed());
        assert!(!window.is_due(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn test_rearm_pushes_deadline() {
        let t0 = Instant::now();
        let mut window = DebounceWindow::new(DELAY);

        window.rearm(t0);
        let second = window.rearm(t0 + Duration::from_millis(500));

        assert_eq!(second, t0 + Duration::from_millis(2500));
        assert!(!window.is_due(t0 + Duration::from_millis(2499)));
        assert!(window.is_due(t0 + Duration::from_millis(2500)));
    }

    #[test]
    fn test_fire_once() {
        let t0 = Instant::now();
        let mut window = DebounceWindow::new(DELAY);
        window.rearm(t0);

        assert!(!window.fire(t0 + Duration::from_millis(1999)));
        assert!(window.fire(t0 + DELAY));
        assert!(!window.fire(t0 + DELAY));
        assert!(!window.is_armed());
    }

    #[test]
    fn test_disarm_cancels() {
        let t0 = Instant::now();
        let mut window = DebounceWindow::new(DELAY);
        window.rearm(t0);
        window.disarm();
        assert!(!window.fire(t0 + DELAY * 10));
    }
}
