//! Error types for persistence

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Reading or writing the blob failed.
    #[error("Storage I/O error on {location}: {reason}")]
    Io { location: String, reason: String },

    /// The blob exists but is not a valid violation collection.
    #[error("Corrupt violation blob: {0}")]
    Corrupt(String),

    /// The collection could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
