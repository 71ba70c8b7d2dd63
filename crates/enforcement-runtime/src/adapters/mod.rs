//! Adapters for runtime-owned ports.

pub mod classifier;

pub use classifier::SyntheticClassifier;
