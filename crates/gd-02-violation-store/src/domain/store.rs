//! # Violation Store - Offense Counting and Lifecycle
//!
//! ## Data Structures
//!
//! - `records`: newest-first `Vec`, the canonical display and internal order
//! - `ids`: id set for O(1) uniqueness checks
//!
//! ## Invariants Enforced
//!
//! - Unique ids (`create()` retries, `rehydrate()` rejects duplicates)
//! - Offense count and fine fixed at creation (`create()`)
//! - Only `status` is ever mutated (`advance()`, `promote_paid()`)
//! - Forward-only edges (`transitions::is_legal_transition`)

use shared_types::{Owner, PlateNumber, Violation, ViolationId, ViolationStatus};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::errors::ViolationError;
use super::pricing::FineSchedule;
use super::transitions::{is_legal_transition, Fulfillment};
use crate::ports::{Clock, IdGenerator, SystemClock, UuidIdGenerator};

/// How many times `create()` asks for a fresh id before giving up.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Append-only violation collection.
pub struct ViolationStore {
    /// All records, newest first.
    records: Vec<Violation>,
    /// Ids currently in use.
    ids: HashSet<ViolationId>,
    /// Fine amounts by offense number.
    fines: FineSchedule,
    id_source: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for ViolationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViolationStore")
            .field("records", &self.records.len())
            .field("fines", &self.fines)
            .finish()
    }
}

impl Default for ViolationStore {
    fn default() -> Self {
        Self::new(FineSchedule::default())
    }
}

impl ViolationStore {
    /// Empty store using random short ids and the local clock.
    pub fn new(fines: FineSchedule) -> Self {
        Self::with_ports(fines, Arc::new(UuidIdGenerator), Arc::new(SystemClock))
    }

    pub fn with_ports(
        fines: FineSchedule,
        id_source: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            records: Vec::new(),
            ids: HashSet::new(),
            fines,
            id_source,
            clock,
        }
    }

    /// Replaces the collection with previously persisted records.
    ///
    /// Records are taken as-is (already newest first); nothing is recomputed.
    ///
    /// # Errors
    /// `DuplicateId` if two records share an id. The store is left unchanged.
    pub fn rehydrate(&mut self, records: Vec<Violation>) -> Result<(), ViolationError> {
        let mut ids = HashSet::with_capacity(records.len());
        for record in &records {
            if !ids.insert(record.id.clone()) {
                return Err(ViolationError::DuplicateId(record.id.clone()));
            }
        }
        info!("[gd-02] Rehydrated {} violation records", records.len());
        self.records = records;
        self.ids = ids;
        Ok(())
    }

    pub fn fines(&self) -> FineSchedule {
        self.fines
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, newest first.
    pub fn records(&self) -> &[Violation] {
        &self.records
    }

    pub fn get(&self, id: &ViolationId) -> Option<&Violation> {
        self.records.iter().find(|v| &v.id == id)
    }

    /// Number of records currently awaiting the fulfillment sweep.
    pub fn paid_count(&self) -> usize {
        self.records.iter().filter(|v| v.is_paid()).count()
    }

    /// Records for a plate, newest first.
    pub fn history(&self, plate: &PlateNumber) -> Vec<&Violation> {
        self.records
            .iter()
            .filter(|v| &v.plate_number == plate)
            .collect()
    }

    /// Records whose plate or owner name contains `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Violation> {
        let needle = term.trim().to_lowercase();
        self.records
            .iter()
            .filter(|v| {
                needle.is_empty()
                    || v.plate_number.as_str().to_lowercase().contains(&needle)
                    || v
                        .owner
                        .as_ref()
                        .is_some_and(|o| o.name.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Records a new PENDING violation and returns a copy of it.
    ///
    /// The offense count is the number of existing records for the plate
    /// plus one; the fine follows from it. The attached owner is a snapshot
    /// whose `total_violations` equals the offense count.
    ///
    /// # Errors
    /// `IdSpaceExhausted` if the id source keeps colliding.
    pub fn create(
        &mut self,
        plate: PlateNumber,
        owner: Option<Owner>,
        image_ref: impl Into<String>,
    ) -> Result<Violation, ViolationError> {
        let id = self.allocate_id()?;

        let prior = self.records.iter().filter(|v| v.plate_number == plate).count();
        let offense_count = u32::try_from(prior).unwrap_or(u32::MAX - 1) + 1;
        let fine_amount = self.fines.fine_for(offense_count);

        let violation = Violation {
            id,
            plate_number: plate,
            timestamp: self.clock.timestamp(),
            image_url: image_ref.into(),
            status: ViolationStatus::Pending,
            offense_count,
            fine_amount,
            owner: owner.map(|o| o.snapshot(offense_count)),
        };

        info!(
            "[gd-02] Recorded violation {} for {} (offense #{}, fine {})",
            violation.id, violation.plate_number, offense_count, fine_amount
        );

        self.ids.insert(violation.id.clone());
        self.records.insert(0, violation.clone());
        Ok(violation)
    }

    /// Moves one record along a legal edge, changing nothing but `status`.
    ///
    /// # Errors
    /// - `NotFound` if no record has this id
    /// - `IllegalTransition` for any edge outside the lifecycle; the record
    ///   is left unchanged
    pub fn advance(
        &mut self,
        id: &ViolationId,
        to: ViolationStatus,
    ) -> Result<Violation, ViolationError> {
        let record = self
            .records
            .iter_mut()
            .find(|v| &v.id == id)
            .ok_or_else(|| ViolationError::NotFound(id.clone()))?;

        if !is_legal_transition(record, to) {
            debug!(
                "[gd-02] Rejected {} -> {} for {}",
                record.status, to, record.id
            );
            return Err(ViolationError::IllegalTransition {
                id: id.clone(),
                from: record.status,
                to,
            });
        }

        record.status = to;
        info!("[gd-02] Violation {} is now {}", record.id, to);
        Ok(record.clone())
    }

    /// Records an explicit payment confirmation: PENDING → PAID.
    pub fn confirm_payment(&mut self, id: &ViolationId) -> Result<Violation, ViolationError> {
        self.advance(id, ViolationStatus::Paid)
    }

    /// Moves every record that is PAID right now to its terminal state.
    ///
    /// Returns the promoted records in collection order. Never touches
    /// PENDING records, so it cannot stand in for a payment.
    pub fn promote_paid(&mut self) -> Vec<Violation> {
        let mut promoted = Vec::new();
        for record in self.records.iter_mut().filter(|v| v.is_paid()) {
            record.status = Fulfillment::for_offense(record.offense_count).terminal_status();
            promoted.push(record.clone());
        }
        if !promoted.is_empty() {
            info!("[gd-02] Fulfillment sweep promoted {} records", promoted.len());
        }
        promoted
    }

    fn allocate_id(&self) -> Result<ViolationId, ViolationError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.id_source.next_id();
            if !self.ids.contains(&candidate) {
                return Ok(candidate);
            }
            debug!("[gd-02] Id collision on {}, retrying", candidate);
        }
        Err(ViolationError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}
