//! Write-through memo of registry oracle answers.
//!
//! No TTL and no eviction. Growth is bounded only by the number of distinct
//! plates seen during the process lifetime.

use parking_lot::RwLock;
use shared_types::{Owner, PlateNumber};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct OwnerCache {
    entries: RwLock<HashMap<PlateNumber, Owner>>,
}

impl OwnerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, plate: &PlateNumber) -> Option<Owner> {
        self.entries.read().get(plate).cloned()
    }

    /// Inserts an entry, returning the one it replaced.
    ///
    /// A replacement only happens when two lookups for the same plate raced
    /// past the cache; the later write wins.
    pub fn insert(&self, plate: PlateNumber, owner: Owner) -> Option<Owner> {
        self.entries.write().insert(plate, owner)
    }

    pub fn contains(&self, plate: &PlateNumber) -> bool {
        self.entries.read().contains_key(plate)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
