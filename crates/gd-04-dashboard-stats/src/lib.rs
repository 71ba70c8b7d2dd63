//! # GD-04 Dashboard Stats
//!
//! Read-only reductions over the violation collection.
//!
//! Nothing here is stored: every metric is recomputed from the full record
//! set on each read, so there is no cache to invalidate.
//!
//! - `stats`: `DashboardStats` and `compute()`
//! - `charts`: series for the settlement bar chart and logistics split

pub mod charts;
pub mod stats;

pub use charts::{
    logistics_split, settlement_history, LogisticsSplit, SettlementBar, SETTLEMENT_HISTORY_LEN,
};
pub use stats::{compute, DashboardStats};
