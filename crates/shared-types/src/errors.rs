//! # Error Types
//!
//! Error types used across components.

use thiserror::Error;

/// Input rejected before any lookup is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Plate was empty after trimming.
    #[error("Plate number is empty")]
    EmptyPlate,
}

/// Failure of an external oracle (classification or owner registry).
///
/// Never retried automatically. The enforcement attempt that triggered the
/// call is abandoned and the error is surfaced to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The oracle could not be reached.
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle did not answer in time.
    #[error("Oracle timed out after {millis}ms")]
    Timeout { millis: u64 },

    /// The oracle answered with something we could not interpret.
    #[error("Malformed oracle response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_error_display() {
        let err = OracleError::Timeout { millis: 1500 };
        assert!(err.to_string().contains("1500ms"));

        let err = OracleError::Unavailable("registry offline".into());
        assert!(err.to_string().contains("registry offline"));
    }
}
