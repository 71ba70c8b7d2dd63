//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::{Owner, PlateNumber};

use crate::error::DirectoryError;

/// Owner lookup API (Driving Port)
#[async_trait]
pub trait OwnerDirectoryApi: Send + Sync {
    /// Resolve the owner registered for an already-normalized plate.
    ///
    /// # Errors
    /// `DirectoryError::Oracle` when the plate is unknown locally and the
    /// external registry query fails. The caller decides how to recover.
    async fn resolve(&self, plate: &PlateNumber) -> Result<Owner, DirectoryError>;
}
