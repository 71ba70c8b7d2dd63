//! # Domain Layer - Owner Directory
//!
//! - `registry`: statically known owners, checked first
//! - `cache`: owners fetched from the oracle, checked second

pub mod cache;
pub mod registry;

pub use cache::OwnerCache;
pub use registry::KnownRegistry;
