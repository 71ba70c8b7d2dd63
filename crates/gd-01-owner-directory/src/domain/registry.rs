//! Static registry of known owners.

use shared_types::{Owner, PlateNumber};
use std::collections::HashMap;

/// Seed entries: (plate, name, address, phone, total violations).
const SEED_OWNERS: &[(&str, &str, &str, &str, u32)] = &[
    (
        "ABC-1234",
        "John Doe",
        "123 Tech Lane, Silicon Valley, CA 94025",
        "+1-555-0101",
        0,
    ),
    (
        "XYZ-9876",
        "Jane Smith",
        "456 Oak Street, Metropolis, NY 10001",
        "+1-555-0202",
        1,
    ),
    (
        "DL-4CN-0012",
        "Rahul Sharma",
        "Flat 402, Sunshine Apartments, Bangalore, KA 560001",
        "+91-9876543210",
        2,
    ),
];

/// Exact-match plate → owner table. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct KnownRegistry {
    owners: HashMap<PlateNumber, Owner>,
}

impl KnownRegistry {
    /// Registry with no entries; every lookup falls through to the cache.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the built-in owners.
    pub fn seeded() -> Self {
        let mut registry = Self::empty();
        for &(plate, name, address, phone, total_violations) in SEED_OWNERS {
            if let Ok(plate) = PlateNumber::normalize(plate) {
                registry.owners.insert(
                    plate,
                    Owner {
                        name: name.to_string(),
                        address: address.to_string(),
                        phone: phone.to_string(),
                        total_violations,
                    },
                );
            }
        }
        registry
    }

    /// Adds or replaces an entry.
    pub fn with_owner(mut self, plate: PlateNumber, owner: Owner) -> Self {
        self.owners.insert(plate, owner);
        self
    }

    pub fn get(&self, plate: &PlateNumber) -> Option<&Owner> {
        self.owners.get(plate)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
