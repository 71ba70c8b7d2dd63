//! Owner Directory Service
//!
//! Orchestrates the registry → cache → oracle fallback.

use async_trait::async_trait;
use shared_types::{Owner, PlateNumber};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{KnownRegistry, OwnerCache};
use crate::error::DirectoryError;
use crate::ports::{OwnerDirectoryApi, OwnerRegistryOracle};

/// Owner Directory implementation
///
/// Implements the `OwnerDirectoryApi` port using an injected registry oracle.
pub struct OwnerDirectory<O: OwnerRegistryOracle> {
    /// Static registry, checked first
    registry: KnownRegistry,
    /// Oracle answers, checked second
    cache: OwnerCache,
    /// External registry (driven port)
    oracle: Arc<O>,
}

impl<O: OwnerRegistryOracle> OwnerDirectory<O> {
    /// Directory with the built-in seeded registry.
    pub fn new(oracle: Arc<O>) -> Self {
        Self::with_registry(oracle, KnownRegistry::seeded())
    }

    pub fn with_registry(oracle: Arc<O>, registry: KnownRegistry) -> Self {
        Self {
            registry,
            cache: OwnerCache::new(),
            oracle,
        }
    }

    /// Number of plates memoized from oracle answers.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, plate: &PlateNumber) -> bool {
        self.cache.contains(plate)
    }
}

#[async_trait]
impl<O: OwnerRegistryOracle + 'static> OwnerDirectoryApi for OwnerDirectory<O> {
    async fn resolve(&self, plate: &PlateNumber) -> Result<Owner, DirectoryError> {
        if let Some(owner) = self.registry.get(plate) {
            debug!("[gd-01] Registry hit for {}", plate);
            return Ok(owner.clone());
        }

        if let Some(owner) = self.cache.get(plate) {
            debug!("[gd-01] Cache hit for {}", plate);
            return Ok(owner);
        }

        // The cache lock is not held across this await.
        debug!("[gd-01] Cache miss for {}, querying registry oracle", plate);
        let owner = match self.oracle.fetch_owner_details(plate).await {
            Ok(owner) => owner,
            Err(e) => {
                warn!("[gd-01] Registry oracle failed for {}: {}", plate, e);
                return Err(e.into());
            }
        };

        if self.cache.insert(plate.clone(), owner.clone()).is_some() {
            debug!("[gd-01] Concurrent lookup for {} overwrote cache entry", plate);
        }
        info!("[gd-01] Resolved {} via registry oracle ({})", plate, owner.name);

        Ok(owner)
    }
}
