//! # Desk Container
//!
//! Builds the enforcement desk from configuration: owner directory, ledger
//! (store, persistence, scheduler) and classifier, wired through their ports.

pub mod assembly;
pub mod config;

pub use assembly::assemble;
pub use config::{load_config, load_config_from, ConfigError, DeskConfig};
