//! Non-fatal wrapper around a `ViolationRepository`.

use shared_types::Violation;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::ports::ViolationRepository;

/// Logs storage failures instead of propagating them.
///
/// The in-memory collection stays authoritative for the running session; a
/// failed mirror is retried implicitly by the next mutation's full save.
pub struct PersistenceBridge {
    repository: Arc<dyn ViolationRepository>,
    failures: AtomicU64,
}

impl PersistenceBridge {
    pub fn new(repository: Arc<dyn ViolationRepository>) -> Self {
        Self {
            repository,
            failures: AtomicU64::new(0),
        }
    }

    /// Load the stored collection. Missing or unreadable storage yields an
    /// empty collection.
    pub fn rehydrate(&self) -> Vec<Violation> {
        match self.repository.load() {
            Ok(Some(violations)) => {
                info!("[gd-05] Rehydrated {} violation records", violations.len());
                violations
            }
            Ok(None) => {
                debug!("[gd-05] No stored violations, starting empty");
                Vec::new()
            }
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!("[gd-05] Rehydrate failed, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite storage with `violations`. Returns whether the save landed.
    pub fn mirror(&self, violations: &[Violation]) -> bool {
        match self.repository.save(violations) {
            Ok(()) => true,
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!(
                    "[gd-05] Mirror of {} records failed: {}",
                    violations.len(),
                    e
                );
                false
            }
        }
    }

    /// Storage failures swallowed so far.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for PersistenceBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceBridge")
            .field("failures", &self.failures())
            .finish_non_exhaustive()
    }
}
