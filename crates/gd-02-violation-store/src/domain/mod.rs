//! # Domain Layer - Violation Store
//!
//! ## Components
//!
//! - `store`: ViolationStore, the newest-first record collection
//! - `pricing`: FineSchedule (first offense vs subsequent)
//! - `transitions`: legal status edges and the fulfillment branch
//! - `errors`: ViolationError enumeration

pub mod errors;
pub mod pricing;
pub mod store;
pub mod transitions;

pub use errors::*;
pub use pricing::*;
pub use store::*;
pub use transitions::*;
