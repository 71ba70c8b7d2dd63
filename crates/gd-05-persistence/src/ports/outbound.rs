//! Outbound (Driven) ports for persistence.

use shared_types::Violation;

use crate::error::PersistenceError;

/// Durable key-value blob holding the full violation collection.
pub trait ViolationRepository: Send + Sync {
    /// Read the stored collection. `Ok(None)` when nothing was ever saved.
    fn load(&self) -> Result<Option<Vec<Violation>>, PersistenceError>;

    /// Overwrite the stored collection.
    fn save(&self, violations: &[Violation]) -> Result<(), PersistenceError>;
}
