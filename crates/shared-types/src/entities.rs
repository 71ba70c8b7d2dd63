//! # Core Domain Entities
//!
//! Defines the enforcement records and the values they are keyed by.
//!
//! ## Clusters
//!
//! - **Identity**: `PlateNumber`, `ViolationId`
//! - **Registry**: `Owner`
//! - **Enforcement**: `Violation`, `ViolationStatus`
//!
//! The serialized form (camelCase keys, SCREAMING_SNAKE status values) is the
//! blob format written by the persistence layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Normalized vehicle plate (trimmed, uppercase).
///
/// The primary key for grouping violations and for owner lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlateNumber(String);

impl PlateNumber {
    /// Normalizes raw operator or oracle input into a plate.
    ///
    /// # Errors
    /// `ValidationError::EmptyPlate` if nothing remains after trimming.
    pub fn normalize(raw: &str) -> Result<Self, ValidationError> {
        let plate = raw.trim().to_uppercase();
        if plate.is_empty() {
            return Err(ValidationError::EmptyPlate);
        }
        Ok(Self(plate))
    }

    /// Returns the normalized plate text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlateNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Opaque violation identifier, unique for the lifetime of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationId(String);

impl ViolationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViolationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViolationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// =============================================================================
// CLUSTER B: REGISTRY
// =============================================================================

/// Registered owner of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub address: String,
    pub phone: String,
    /// On a record's owner: the plate's offense count when the record was
    /// created. On a registry entry: whatever the registry reported.
    pub total_violations: u32,
}

impl Owner {
    /// Copy of this owner with `total_violations` pinned to `offense_count`.
    pub fn snapshot(&self, offense_count: u32) -> Self {
        Self {
            total_violations: offense_count,
            ..self.clone()
        }
    }
}

// =============================================================================
// CLUSTER C: ENFORCEMENT
// =============================================================================

/// Lifecycle status of a violation.
///
/// ```text
/// [PENDING] ──payment──→ [PAID] ──sweep──→ [HELMET_SHIPPED]      (first offense)
///                                  └─────→ [GOVERNMENT_REVENUE]  (repeat offense)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationStatus {
    /// Fine issued, awaiting payment.
    #[default]
    Pending,
    /// Payment confirmed, awaiting the fulfillment sweep.
    Paid,
    /// First offense settled: a helmet was dispatched to the owner.
    HelmetShipped,
    /// Repeat offense settled: the fine was booked as revenue.
    GovernmentRevenue,
}

impl ViolationStatus {
    /// True for states with no outgoing edge.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::HelmetShipped | Self::GovernmentRevenue)
    }

    /// True once payment has been confirmed.
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Wire name, as persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::HelmetShipped => "HELMET_SHIPPED",
            Self::GovernmentRevenue => "GOVERNMENT_REVENUE",
        }
    }
}

impl fmt::Display for ViolationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded helmet violation.
///
/// Append-only: after creation only `status` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub id: ViolationId,
    pub plate_number: PlateNumber,
    /// Creation time as a display string.
    pub timestamp: String,
    /// Evidence reference (captured image or placeholder URL).
    pub image_url: String,
    pub status: ViolationStatus,
    /// 1-indexed count of this plate's violations, fixed at creation.
    pub offense_count: u32,
    /// Fine in whole rupees, fixed at creation.
    pub fine_amount: u64,
    /// Absent when no owner could be attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

impl Violation {
    pub fn is_first_offense(&self) -> bool {
        self.offense_count == 1
    }

    pub fn is_pending(&self) -> bool {
        self.status == ViolationStatus::Pending
    }

    pub fn is_paid(&self) -> bool {
        self.status == ViolationStatus::Paid
    }
}
