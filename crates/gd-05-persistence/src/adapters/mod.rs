//! Storage adapters.
//!
//! - `JsonFileRepository` - one JSON file per blob key
//! - `InMemoryRepository` - process-local blob for tests and ephemeral runs

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

/// Blob key the collection is stored under.
pub const DEFAULT_BLOB_KEY: &str = "guardia_violations_v2";
