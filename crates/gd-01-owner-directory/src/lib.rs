//! # GD-01 Owner Directory
//!
//! Resolves a normalized plate to the registered owner.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure lookup tables, no I/O
//!   - `KnownRegistry`: static, seeded plate → owner table
//!   - `OwnerCache`: process-lifetime memo of oracle answers
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `OwnerDirectoryApi`: Driving port (inbound API)
//!   - `OwnerRegistryOracle`: Driven port (external registry)
//!
//! - **Service Layer** (`service`): `OwnerDirectory` implements the lookup order
//!
//! - **Adapters Layer** (`adapters/`): `SyntheticRegistryOracle`
//!
//! ## Lookup Order
//!
//! ```text
//! resolve(plate)
//!   ├── KnownRegistry hit ──→ owner
//!   ├── OwnerCache hit ─────→ owner
//!   └── oracle.fetch ──ok──→ cache.insert ──→ owner
//!                    └─err─→ DirectoryError (nothing cached)
//! ```
//!
//! Entries never expire. Concurrent misses for the same plate are not
//! coalesced: both query the oracle and the last cache write wins.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::SyntheticRegistryOracle;
pub use domain::{KnownRegistry, OwnerCache};
pub use error::DirectoryError;
pub use ports::{OwnerDirectoryApi, OwnerRegistryOracle};
pub use service::OwnerDirectory;
