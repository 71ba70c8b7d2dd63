//! # Enforcement Runtime Library
//!
//! Wires the desk components together. The `guardia-desk` binary in
//! `main.rs` is a thin console over this library.
//!
//! ## Components
//!
//! | Crate | Role in the desk |
//! |-------|------------------|
//! | `gd-01-owner-directory` | Owner for each recorded plate |
//! | `gd-02-violation-store` | Record creation, payment, fulfillment sweep |
//! | `gd-03-lifecycle-scheduler` | Debounced sweep after payments go quiet |
//! | `gd-04-dashboard-stats` | Overview metrics and chart series |
//! | `gd-05-persistence` | Snapshot after every mutation, rehydrate on open |
//!
//! ## Module Structure
//!
//! - `container/` - configuration and desk assembly
//! - `ledger` - store + persistence + scheduler under one lock
//! - `desk` - capture, manual entry, settlement and tracking workflows
//! - `ports/` / `adapters/` - classification oracle and its offline adapter
//! - `handlers/` - console command parsing and rendering

pub mod adapters;
pub mod container;
pub mod desk;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod ports;

pub use container::{assemble, load_config, ConfigError, DeskConfig};
pub use desk::{
    CaptureOutcome, EnforcementDesk, Overview, Settlement, TrackingReport, TrackingStage,
    MANUAL_ENTRY_EVIDENCE,
};
pub use error::DeskError;
pub use ledger::ViolationLedger;
pub use ports::{AnalysisResult, ClassificationOracle};
