//! Outbound Ports (Driven Ports)
//!
//! The external owner registry. Treated as a black box: possibly slow,
//! possibly failing, with no cancellation contract.

use async_trait::async_trait;
use shared_types::{OracleError, Owner, PlateNumber};

/// External vehicle-registry lookup (Driven Port)
#[async_trait]
pub trait OwnerRegistryOracle: Send + Sync {
    /// Fetch owner details for a plate.
    async fn fetch_owner_details(&self, plate: &PlateNumber) -> Result<Owner, OracleError>;
}
