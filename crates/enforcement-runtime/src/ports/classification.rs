//! Image classification port.

use async_trait::async_trait;
use shared_types::OracleError;

/// What the classifier saw in a captured frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Rider is wearing a helmet.
    pub has_helmet: bool,
    /// Plate as read from the frame, unnormalized. Empty when unreadable.
    pub plate_number: String,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
}

/// External vision service that inspects a captured frame.
#[async_trait]
pub trait ClassificationOracle: Send + Sync {
    async fn analyze(&self, image_ref: &str) -> Result<AnalysisResult, OracleError>;
}
