//! Synthetic registry oracle.
//!
//! Fabricates a plausible owner for any plate. The same plate always yields
//! the same owner (SHA-256 of the plate drives every choice), so repeated
//! runs and cache tests are deterministic.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use shared_types::{OracleError, Owner, PlateNumber};
use std::time::Duration;

use crate::ports::OwnerRegistryOracle;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Priya", "Vikram", "Ananya", "Rohan", "Meera", "Arjun", "Kavya",
];
const LAST_NAMES: &[&str] = &[
    "Patel", "Iyer", "Reddy", "Nair", "Gupta", "Khan", "Singh", "Das",
];
const STREETS: &[&str] = &[
    "MG Road",
    "Park Street",
    "Linking Road",
    "Brigade Road",
    "Anna Salai",
    "FC Road",
];
const CITIES: &[&str] = &[
    "Mumbai, MH 400050",
    "Kolkata, WB 700016",
    "Bengaluru, KA 560025",
    "Chennai, TN 600002",
    "Pune, MH 411004",
    "Hyderabad, TS 500081",
];

/// Offline registry oracle with configurable latency.
#[derive(Debug, Clone, Default)]
pub struct SyntheticRegistryOracle {
    latency: Duration,
}

impl SyntheticRegistryOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a slow registry round-trip.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn fabricate(plate: &PlateNumber) -> Owner {
        let digest = Sha256::digest(plate.as_str().as_bytes());
        let pick = |list: &[&'static str], byte: u8| list[byte as usize % list.len()];

        let mut phone_bytes = [0u8; 8];
        phone_bytes.copy_from_slice(&digest[8..16]);
        let phone_digits = u64::from_le_bytes(phone_bytes) % 1_000_000_000;

        Owner {
            name: format!(
                "{} {}",
                pick(FIRST_NAMES, digest[0]),
                pick(LAST_NAMES, digest[1])
            ),
            address: format!(
                "{} {}, {}",
                u16::from(digest[2]) + 1,
                pick(STREETS, digest[3]),
                pick(CITIES, digest[4])
            ),
            phone: format!("+91-9{:09}", phone_digits),
            total_violations: u32::from(digest[5] % 3),
        }
    }
}

#[async_trait]
impl OwnerRegistryOracle for SyntheticRegistryOracle {
    async fn fetch_owner_details(&self, plate: &PlateNumber) -> Result<Owner, OracleError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Self::fabricate(plate))
    }
}
