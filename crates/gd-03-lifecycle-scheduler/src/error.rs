//! Error types for the Lifecycle Scheduler

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The background task has exited; notifications go nowhere.
    #[error("Lifecycle scheduler is not running")]
    Stopped,

    /// The background task panicked or was aborted.
    #[error("Lifecycle scheduler task failed: {0}")]
    TaskFailed(String),
}
