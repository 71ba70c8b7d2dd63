//! In-memory adapter.
//!
//! Holds the encoded JSON blob rather than the records themselves, so it
//! exercises the same serialization path as the file adapter.

use parking_lot::Mutex;
use shared_types::Violation;

use crate::error::PersistenceError;
use crate::ports::ViolationRepository;

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    blob: Mutex<Option<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with a raw blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }

    /// The raw stored blob, if any.
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().clone()
    }
}

impl ViolationRepository for InMemoryRepository {
    fn load(&self) -> Result<Option<Vec<Violation>>, PersistenceError> {
        match self.blob.lock().as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| PersistenceError::Corrupt(e.to_string())),
        }
    }

    fn save(&self, violations: &[Violation]) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(violations)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        *self.blob.lock() = Some(encoded);
        Ok(())
    }
}
