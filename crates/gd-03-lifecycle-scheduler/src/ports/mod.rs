//! Ports layer for the Lifecycle Scheduler.

pub mod outbound;

pub use outbound::PromotionTarget;
