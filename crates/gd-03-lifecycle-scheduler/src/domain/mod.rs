//! # Domain Layer - Lifecycle Scheduler
//!
//! - `debounce`: deadline bookkeeping for the promotion sweep
//! - `config`: scheduler configuration

pub mod config;
pub mod debounce;

pub use config::{SchedulerConfig, DEFAULT_PROMOTION_DELAY_MS};
pub use debounce::DebounceWindow;
