//! Adapters Layer (Driven Adapters)
//!
//! - `SyntheticRegistryOracle` - offline stand-in for the vehicle registry

pub mod synthetic;

pub use synthetic::SyntheticRegistryOracle;
