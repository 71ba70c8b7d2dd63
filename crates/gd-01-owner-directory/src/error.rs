//! Error types for the Owner Directory

use shared_types::OracleError;
use thiserror::Error;

/// Errors surfaced by `OwnerDirectory::resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The registry oracle failed; the directory does not retry or recover.
    #[error("Owner lookup failed: {0}")]
    Oracle(#[from] OracleError),
}
