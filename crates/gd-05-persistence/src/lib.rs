//! # GD-05 Persistence
//!
//! Mirrors the violation collection to durable storage.
//!
//! ## Contract
//!
//! - One named blob holds the whole collection as JSON.
//! - `load()` runs once at startup; `save()` overwrites the blob after every
//!   mutation. Last save wins.
//! - Every field round-trips, including the nested owner snapshot.
//!
//! ## Failure Policy
//!
//! Storage failures are never fatal. `PersistenceBridge` logs them and the
//! desk keeps operating on the in-memory collection.
//!
//! ## Module Structure
//!
//! ```text
//! ports/outbound.rs     - ViolationRepository
//! adapters/json_file.rs - JsonFileRepository (<data_dir>/<key>.json)
//! adapters/memory.rs    - InMemoryRepository
//! bridge.rs             - PersistenceBridge (non-fatal wrapper)
//! ```

pub mod adapters;
pub mod bridge;
pub mod error;
pub mod ports;

pub use adapters::{InMemoryRepository, JsonFileRepository, DEFAULT_BLOB_KEY};
pub use bridge::PersistenceBridge;
pub use error::PersistenceError;
pub use ports::ViolationRepository;
