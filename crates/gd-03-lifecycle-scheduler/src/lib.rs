//! # GD-03 Lifecycle Scheduler
//!
//! Promotes paid violations to their fulfillment state after a quiet period.
//!
//! ## Behavior
//!
//! The scheduler is a single background task. Every change to the violation
//! collection is reported through `SchedulerHandle::notify()`:
//!
//! - no PAID records → any pending sweep is cancelled
//! - at least one PAID record → the sweep is (re)armed for `now + delay`
//!
//! When the deadline passes without another change, one sweep promotes every
//! record that is PAID *at that moment*. The delay is a debounce window
//! measured from the most recent change, not a per-record timer.
//!
//! ```text
//! notify ──paid>0──→ arm(now+2s) ──notify──→ re-arm(now+2s) ──quiet 2s──→ sweep
//!        └─paid=0──→ disarm
//! ```
//!
//! Because exactly one task owns the window, overlapping notifications can
//! never produce overlapping sweeps.
//!
//! ## Module Structure
//!
//! ```text
//! domain/debounce.rs  - DebounceWindow (deadline bookkeeping)
//! ports/outbound.rs   - PromotionTarget (the collection being swept)
//! service.rs          - LifecycleScheduler task + SchedulerHandle
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{DebounceWindow, SchedulerConfig, DEFAULT_PROMOTION_DELAY_MS};
pub use error::SchedulerError;
pub use ports::PromotionTarget;
pub use service::{LifecycleScheduler, SchedulerHandle};
