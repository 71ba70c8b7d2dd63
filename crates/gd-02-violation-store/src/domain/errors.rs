//! Violation store error types.

use shared_types::{ViolationId, ViolationStatus};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ViolationError {
    /// No record with this id.
    #[error("Violation not found: {0}")]
    NotFound(ViolationId),

    /// The requested edge is not part of the lifecycle. Record unchanged.
    #[error("Illegal transition for {id}: {from} -> {to}")]
    IllegalTransition {
        id: ViolationId,
        from: ViolationStatus,
        to: ViolationStatus,
    },

    /// Two records share an id (only possible in rehydrated data).
    #[error("Duplicate violation id: {0}")]
    DuplicateId(ViolationId),

    /// The id generator kept returning ids already in use.
    #[error("Could not allocate a fresh violation id after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_transition_display() {
        let err = ViolationError::IllegalTransition {
            id: ViolationId::new("abc"),
            from: ViolationStatus::HelmetShipped,
            to: ViolationStatus::Pending,
        };
        let msg = err.to_string();
        assert!(msg.contains("HELMET_SHIPPED -> PENDING"));
        assert!(msg.contains("abc"));
    }
}
