//! # Shared Types Crate
//!
//! Domain entities shared by every Guardia component.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Violation` and `Owner` are defined once and
//!   persisted in exactly this shape.
//! - **Normalized Keys**: a `PlateNumber` can only be built through
//!   `PlateNumber::normalize`, so every lookup keys on the same form.
//! - **Snapshots, not references**: the `Owner` attached to a violation is a
//!   copy taken at creation time.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
