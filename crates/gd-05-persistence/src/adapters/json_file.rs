//! JSON file adapter.
//!
//! The blob lives at `<data_dir>/<key>.json`. Saves go to a sibling temp file
//! that is then renamed over the blob, so a crash mid-write leaves the
//! previous save intact.

use shared_types::Violation;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PersistenceError;
use crate::ports::ViolationRepository;

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(data_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            location: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl ViolationRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<Vec<Violation>>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let violations: Vec<Violation> =
            serde_json::from_str(&raw).map_err(|e| PersistenceError::Corrupt(e.to_string()))?;
        debug!(
            "[gd-05] Loaded {} records from {}",
            violations.len(),
            self.path.display()
        );
        Ok(Some(violations))
    }

    fn save(&self, violations: &[Violation]) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(violations)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(
            "[gd-05] Saved {} records to {}",
            violations.len(),
            self.path.display()
        );
        Ok(())
    }
}
