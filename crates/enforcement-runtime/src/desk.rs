//! # Enforcement Desk
//!
//! Operator workflows over the ledger.
//!
//! | Workflow | Steps |
//! |----------|-------|
//! | `process_capture` | classify → normalize plate → resolve owner → record |
//! | `enter_manually` | normalize plate → resolve owner → record with placeholder evidence |
//! | `settle` | gateway delay → confirm payment |
//! | `track` | current record and its fulfillment stage |
//!
//! A failed classification or owner lookup abandons the attempt: no record is
//! created and the error goes back to the operator. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use gd_01_owner_directory::OwnerDirectoryApi;
use gd_02_violation_store::{Fulfillment, ViolationError};
use gd_03_lifecycle_scheduler::SchedulerError;
use gd_04_dashboard_stats::{
    logistics_split, DashboardStats, LogisticsSplit, SettlementBar, SETTLEMENT_HISTORY_LEN,
};
use shared_types::{PlateNumber, Violation, ViolationId, ViolationStatus};
use tracing::{info, warn};

use crate::error::DeskError;
use crate::ledger::ViolationLedger;
use crate::ports::{AnalysisResult, ClassificationOracle};

/// Evidence attached to manually entered violations.
pub const MANUAL_ENTRY_EVIDENCE: &str =
    "https://images.unsplash.com/photo-1558981403-c5f97cbba6c1?q=80&w=200&auto=format&fit=crop";

/// Result of processing one captured frame.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// Helmet detected; nothing recorded.
    Compliant(AnalysisResult),
    /// No helmet; a violation was recorded.
    Recorded {
        violation: Violation,
        confidence: f64,
    },
}

/// A confirmed payment and what it sets in motion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub violation: Violation,
    pub fulfillment: Fulfillment,
}

/// Where a record stands from the offender's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStage {
    AwaitingPayment,
    /// Paid; the sweep has not run yet.
    Processing(Fulfillment),
    HelmetDispatched,
    RevenueBooked,
}

impl TrackingStage {
    pub fn of(violation: &Violation) -> Self {
        match violation.status {
            ViolationStatus::Pending => Self::AwaitingPayment,
            ViolationStatus::Paid => {
                Self::Processing(Fulfillment::for_offense(violation.offense_count))
            }
            ViolationStatus::HelmetShipped => Self::HelmetDispatched,
            ViolationStatus::GovernmentRevenue => Self::RevenueBooked,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::AwaitingPayment => "awaiting payment",
            Self::Processing(Fulfillment::HelmetDispatch) => "payment received, preparing helmet",
            Self::Processing(Fulfillment::GovernmentRevenue) => {
                "payment received, booking penalty"
            }
            Self::HelmetDispatched => "helmet dispatched to registered address",
            Self::RevenueBooked => "penalty booked as government revenue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingReport {
    pub violation: Violation,
    pub stage: TrackingStage,
}

/// Everything the overview screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub stats: DashboardStats,
    pub settlement_history: Vec<SettlementBar>,
    pub logistics: LogisticsSplit,
}

pub struct EnforcementDesk {
    ledger: ViolationLedger,
    directory: Arc<dyn OwnerDirectoryApi>,
    classifier: Arc<dyn ClassificationOracle>,
    payment_delay: Duration,
}

impl EnforcementDesk {
    pub fn new(
        ledger: ViolationLedger,
        directory: Arc<dyn OwnerDirectoryApi>,
        classifier: Arc<dyn ClassificationOracle>,
        payment_delay: Duration,
    ) -> Self {
        Self {
            ledger,
            directory,
            classifier,
            payment_delay,
        }
    }

    pub fn ledger(&self) -> &ViolationLedger {
        &self.ledger
    }

    /// Classify a captured frame and record a violation if the rider has no
    /// helmet.
    pub async fn process_capture(&self, image_ref: &str) -> Result<CaptureOutcome, DeskError> {
        let analysis = self.classifier.analyze(image_ref).await.map_err(|e| {
            warn!("[gd-02] Capture analysis failed: {}", e);
            DeskError::from(e)
        })?;

        if analysis.has_helmet {
            info!(
                "[gd-02] Compliant rider ({:.0}% confidence), nothing recorded",
                analysis.confidence * 100.0
            );
            return Ok(CaptureOutcome::Compliant(analysis));
        }

        let plate = PlateNumber::normalize(&analysis.plate_number)?;
        let violation = self.record(plate, image_ref).await?;
        Ok(CaptureOutcome::Recorded {
            violation,
            confidence: analysis.confidence,
        })
    }

    /// Record a violation from an operator-typed plate.
    pub async fn enter_manually(&self, raw_plate: &str) -> Result<Violation, DeskError> {
        let plate = PlateNumber::normalize(raw_plate)?;
        self.record(plate, MANUAL_ENTRY_EVIDENCE).await
    }

    /// Take payment for a PENDING record.
    ///
    /// The record is checked before the gateway round-trip so a bad id fails
    /// fast, and checked again when the payment lands.
    pub async fn settle(&self, id: &ViolationId) -> Result<Settlement, DeskError> {
        let current = self
            .ledger
            .get(id)
            .ok_or_else(|| ViolationError::NotFound(id.clone()))?;
        if !current.is_pending() {
            return Err(ViolationError::IllegalTransition {
                id: id.clone(),
                from: current.status,
                to: ViolationStatus::Paid,
            }
            .into());
        }

        info!(
            "[gd-02] Processing payment of {} for {}",
            current.fine_amount, id
        );
        tokio::time::sleep(self.payment_delay).await;

        let violation = self.ledger.confirm_payment(id)?;
        let fulfillment = Fulfillment::for_offense(violation.offense_count);
        info!(
            "[gd-02] Payment confirmed for {}, activating {}",
            id,
            fulfillment.describe()
        );
        Ok(Settlement {
            violation,
            fulfillment,
        })
    }

    pub fn track(&self, id: &ViolationId) -> Result<TrackingReport, DeskError> {
        let violation = self
            .ledger
            .get(id)
            .ok_or_else(|| ViolationError::NotFound(id.clone()))?;
        let stage = TrackingStage::of(&violation);
        Ok(TrackingReport { violation, stage })
    }

    /// Violation log, optionally filtered by plate or owner name.
    pub fn log(&self, term: Option<&str>) -> Vec<Violation> {
        match term {
            Some(term) => self.ledger.search(term),
            None => self.ledger.snapshot(),
        }
    }

    pub fn overview(&self) -> Overview {
        let stats = self.ledger.stats();
        Overview {
            stats,
            settlement_history: self.ledger.settlement_history(SETTLEMENT_HISTORY_LEN),
            logistics: logistics_split(&stats),
        }
    }

    pub async fn shutdown(self) -> Result<(), SchedulerError> {
        self.ledger.shutdown().await
    }

    async fn record(&self, plate: PlateNumber, evidence: &str) -> Result<Violation, DeskError> {
        let owner = self.directory.resolve(&plate).await?;
        Ok(self.ledger.record(plate, Some(owner), evidence)?)
    }
}
