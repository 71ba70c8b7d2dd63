//! Errors surfaced to the operator by desk workflows.

use gd_01_owner_directory::DirectoryError;
use gd_02_violation_store::ViolationError;
use shared_types::{OracleError, ValidationError};
use thiserror::Error;

/// Any single workflow failure. None of these stop the desk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeskError {
    /// Input rejected before any lookup.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The classifier failed; no record was created.
    #[error("Image analysis failed: {0}")]
    Oracle(#[from] OracleError),

    /// Owner lookup failed; no record was created.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The record store refused the operation.
    #[error(transparent)]
    Violation(#[from] ViolationError),
}
