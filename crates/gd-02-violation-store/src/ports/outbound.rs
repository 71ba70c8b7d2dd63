//! Outbound (Driven) ports for the Violation Store.

use shared_types::ViolationId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of candidate violation ids.
///
/// Ids need not be globally unique; the store rejects collisions and asks
/// again.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ViolationId;
}

/// Source of record timestamps (display strings).
pub trait Clock: Send + Sync {
    fn timestamp(&self) -> String;
}

/// Length of generated ids.
pub const ID_LENGTH: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Short base-36 ids drawn from v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ViolationId {
        let mut bits = uuid::Uuid::new_v4().as_u128();
        let mut id = String::with_capacity(ID_LENGTH);
        for _ in 0..ID_LENGTH {
            id.push(BASE36[(bits % 36) as usize] as char);
            bits /= 36;
        }
        ViolationId::new(id)
    }
}

/// Local wall-clock time, formatted like `1/19/2026, 3:04:05 PM`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        chrono::Local::now()
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }
}

/// Deterministic ids `v1`, `v2`, ... for tests and replays.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    issued: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ViolationId {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        ViolationId::new(format!("v{}", n))
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_short_base36() {
        let ids = UuidIdGenerator;
        let id = ids.next_id();
        assert_eq!(id.as_str().len(), ID_LENGTH);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(ids.next_id(), id);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id().as_str(), "v1");
        assert_eq!(ids.next_id().as_str(), "v2");
    }

    #[test]
    fn test_system_clock_format() {
        let stamp = SystemClock.timestamp();
        assert!(stamp.contains(", "));
        assert!(stamp.ends_with("AM") || stamp.ends_with("PM"));
    }
}
