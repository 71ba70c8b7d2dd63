//! Shared fixtures for integration scenarios.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use enforcement_runtime::{
    AnalysisResult, ClassificationOracle, EnforcementDesk, ViolationLedger,
};
use gd_01_owner_directory::{OwnerDirectory, OwnerRegistryOracle};
use gd_02_violation_store::{FineSchedule, FixedClock, SequentialIdGenerator, ViolationStore};
use gd_03_lifecycle_scheduler::SchedulerConfig;
use gd_05_persistence::ViolationRepository;
use shared_types::{OracleError, Owner, PlateNumber};

pub const PAYMENT_DELAY: Duration = Duration::from_millis(1_500);

/// Registry oracle that counts its calls.
#[derive(Default)]
pub struct CountingRegistry {
    calls: AtomicUsize,
}

impl CountingRegistry {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OwnerRegistryOracle for CountingRegistry {
    async fn fetch_owner_details(&self, plate: &PlateNumber) -> Result<Owner, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Owner {
            name: format!("Registered owner of {}", plate),
            address: "7 Ring Road, Bengaluru, KA 560034".into(),
            phone: "+91-9000000000".into(),
            total_violations: 0,
        })
    }
}

/// Classifier that always reports a helmetless rider on `plate`.
pub struct NoHelmetOn(pub &'static str);

#[async_trait]
impl ClassificationOracle for NoHelmetOn {
    async fn analyze(&self, _image_ref: &str) -> Result<AnalysisResult, OracleError> {
        Ok(AnalysisResult {
            has_helmet: false,
            plate_number: self.0.to_string(),
            confidence: 0.97,
        })
    }
}

/// Desk with sequential ids, a fixed clock and default timings.
pub fn desk_on(
    repository: Arc<dyn ViolationRepository>,
    registry: Arc<CountingRegistry>,
) -> EnforcementDesk {
    let store = ViolationStore::with_ports(
        FineSchedule::default(),
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(FixedClock("3/8/2026, 10:15:00 AM".into())),
    );
    let ledger = ViolationLedger::with_store(store, repository, SchedulerConfig::default());
    EnforcementDesk::new(
        ledger,
        Arc::new(OwnerDirectory::new(registry)),
        Arc::new(NoHelmetOn("ab-123")),
        PAYMENT_DELAY,
    )
}
