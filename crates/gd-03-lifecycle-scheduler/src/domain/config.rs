//! Scheduler configuration.

use std::time::Duration;

/// Quiet period before paid records are promoted.
pub const DEFAULT_PROMOTION_DELAY_MS: u64 = 2_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Debounce window measured from the most recent change.
    pub promotion_delay: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            promotion_delay: Duration::from_millis(DEFAULT_PROMOTION_DELAY_MS),
        }
    }
}

impl SchedulerConfig {
    pub fn with_delay(promotion_delay: Duration) -> Self {
        Self { promotion_delay }
    }
}
