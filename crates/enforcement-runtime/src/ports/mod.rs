//! Ports owned by the runtime.
//!
//! Owner lookup and persistence ports live in their component crates; only
//! the classifier has no component of its own.

pub mod classification;

pub use classification::{AnalysisResult, ClassificationOracle};
