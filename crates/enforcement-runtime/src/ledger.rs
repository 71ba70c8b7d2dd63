//! # Violation Ledger
//!
//! Owns the violation collection for the running desk and keeps its two
//! followers in step: persistence gets a full snapshot after every mutation,
//! and the lifecycle scheduler is told that the collection changed.
//!
//! ## Locking
//!
//! The store sits behind one `parking_lot::Mutex`. A mutation takes the lock,
//! mutates, and saves the resulting snapshot before releasing, so saves land
//! in mutation order. The scheduler is notified after release. Nothing awaits
//! while the lock is held.
//!
//! ```text
//! ViolationLedger ──owns──→ SchedulerHandle ──channel──→ scheduler task
//!        │                                                    │
//!        └──Arc──→ LedgerState ←─────────────Weak─────────────┘
//! ```

use std::sync::Arc;

use gd_02_violation_store::{FineSchedule, ViolationError, ViolationStore};
use gd_03_lifecycle_scheduler::{
    LifecycleScheduler, PromotionTarget, SchedulerConfig, SchedulerError, SchedulerHandle,
};
use gd_04_dashboard_stats::{self as dashboard, DashboardStats, SettlementBar};
use gd_05_persistence::{PersistenceBridge, ViolationRepository};
use parking_lot::Mutex;
use shared_types::{Owner, PlateNumber, Violation, ViolationId};
use tracing::{info, warn};

/// Store plus its persistence mirror. The scheduler's promotion target.
pub struct LedgerState {
    store: Mutex<ViolationStore>,
    persistence: PersistenceBridge,
}

impl LedgerState {
    fn new(store: ViolationStore, persistence: PersistenceBridge) -> Self {
        Self {
            store: Mutex::new(store),
            persistence,
        }
    }

    /// Run `mutate` under the lock and, if it reports a change, mirror the
    /// result before the lock is released.
    fn mutate<R>(&self, mutate: impl FnOnce(&mut ViolationStore) -> (R, bool)) -> R {
        let mut store = self.store.lock();
        let (out, changed) = mutate(&mut store);
        if changed {
            self.persistence.mirror(store.records());
        }
        out
    }

    fn read<R>(&self, read: impl FnOnce(&ViolationStore) -> R) -> R {
        read(&self.store.lock())
    }
}

impl PromotionTarget for LedgerState {
    fn paid_count(&self) -> usize {
        self.read(|store| store.paid_count())
    }

    fn promote_paid(&self) -> usize {
        self.mutate(|store| {
            let promoted = store.promote_paid();
            let count = promoted.len();
            (count, count > 0)
        })
    }
}

/// The desk's single source of truth for violation records.
///
/// Must be opened inside a tokio runtime; the scheduler task is spawned on it.
pub struct ViolationLedger {
    core: Arc<LedgerState>,
    scheduler: SchedulerHandle,
}

impl ViolationLedger {
    /// Open a ledger with default id and clock sources.
    pub fn open(
        repository: Arc<dyn ViolationRepository>,
        fines: FineSchedule,
        scheduler: SchedulerConfig,
    ) -> Self {
        Self::with_store(ViolationStore::new(fines), repository, scheduler)
    }

    /// Open a ledger around a preconfigured (empty) store.
    ///
    /// Stored records are rehydrated into `store`. Records left PAID by an
    /// earlier session are swept after the usual quiet period.
    pub fn with_store(
        mut store: ViolationStore,
        repository: Arc<dyn ViolationRepository>,
        scheduler: SchedulerConfig,
    ) -> Self {
        let persistence = PersistenceBridge::new(repository);
        let records = persistence.rehydrate();
        if let Err(e) = store.rehydrate(records) {
            warn!("[gd-05] Stored collection rejected, starting empty: {}", e);
        }

        let core = Arc::new(LedgerState::new(store, persistence));
        let scheduler = LifecycleScheduler::spawn(&core, scheduler);
        let ledger = Self { core, scheduler };

        if ledger.core.paid_count() > 0 {
            ledger.changed();
        }
        ledger
    }

    /// Create a PENDING record for `plate`.
    pub fn record(
        &self,
        plate: PlateNumber,
        owner: Option<Owner>,
        image_ref: impl Into<String>,
    ) -> Result<Violation, ViolationError> {
        let created = self.core.mutate(|store| {
            let result = store.create(plate, owner, image_ref);
            let changed = result.is_ok();
            (result, changed)
        })?;
        self.changed();
        Ok(created)
    }

    /// PENDING → PAID for one record.
    pub fn confirm_payment(&self, id: &ViolationId) -> Result<Violation, ViolationError> {
        let paid = self.core.mutate(|store| {
            let result = store.confirm_payment(id);
            let changed = result.is_ok();
            (result, changed)
        })?;
        self.changed();
        Ok(paid)
    }

    pub fn get(&self, id: &ViolationId) -> Option<Violation> {
        self.core.read(|store| store.get(id).cloned())
    }

    /// All records, newest first.
    pub fn snapshot(&self) -> Vec<Violation> {
        self.core.read(|store| store.records().to_vec())
    }

    /// Records whose plate or owner name contains `term`, newest first.
    pub fn search(&self, term: &str) -> Vec<Violation> {
        self.core
            .read(|store| store.search(term).into_iter().cloned().collect())
    }

    pub fn history(&self, plate: &PlateNumber) -> Vec<Violation> {
        self.core
            .read(|store| store.history(plate).into_iter().cloned().collect())
    }

    pub fn stats(&self) -> DashboardStats {
        self.core.read(|store| dashboard::compute(store.records()))
    }

    pub fn settlement_history(&self, limit: usize) -> Vec<SettlementBar> {
        self.core
            .read(|store| dashboard::settlement_history(store.records(), limit))
    }

    pub fn len(&self) -> usize {
        self.core.read(|store| store.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fulfillment sweeps run so far.
    pub fn sweeps(&self) -> u64 {
        self.scheduler.sweeps()
    }

    /// Storage failures swallowed so far.
    pub fn persistence_failures(&self) -> u64 {
        self.core.persistence.failures()
    }

    /// Stop the scheduler. A sweep that has not fired yet is dropped; the
    /// affected records stay PAID and are swept on the next open.
    pub async fn shutdown(self) -> Result<(), SchedulerError> {
        info!("[gd-03] Stopping lifecycle scheduler");
        self.scheduler.shutdown().await
    }

    fn changed(&self) {
        if let Err(e) = self.scheduler.notify() {
            warn!("[gd-03] Scheduler did not accept change notice: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gd_02_violation_store::{FixedClock, SequentialIdGenerator};
    use gd_05_persistence::{InMemoryRepository, PersistenceError};
    use shared_types::ViolationStatus;
    use std::time::Duration;

    /// Storage that is always offline.
    struct OfflineRepository;

    impl ViolationRepository for OfflineRepository {
        fn load(&self) -> Result<Option<Vec<Violation>>, PersistenceError> {
            Err(PersistenceError::Io {
                location: "offline".into(),
                reason: "device offline".into(),
            })
        }

        fn save(&self, _violations: &[Violation]) -> Result<(), PersistenceError> {
            Err(PersistenceError::Io {
                location: "offline".into(),
                reason: "device offline".into(),
            })
        }
    }

    /// In-memory storage whose save of a lone shipped record is slow.
    #[derive(Default)]
    struct SlowShipmentRepository {
        inner: InMemoryRepository,
        saved_lens: Mutex<Vec<usize>>,
    }

    impl ViolationRepository for SlowShipmentRepository {
        fn load(&self) -> Result<Option<Vec<Violation>>, PersistenceError> {
            self.inner.load()
        }

        fn save(&self, violations: &[Violation]) -> Result<(), PersistenceError> {
            if violations.len() == 1 && violations[0].status == ViolationStatus::HelmetShipped {
                std::thread::sleep(Duration::from_millis(300));
            }
            self.saved_lens.lock().push(violations.len());
            self.inner.save(violations)
        }
    }

    fn plate(raw: &str) -> PlateNumber {
        PlateNumber::normalize(raw).unwrap()
    }

    fn ledger_on(repo: Arc<InMemoryRepository>) -> ViolationLedger {
        let store = ViolationStore::with_ports(
            FineSchedule::default(),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(FixedClock("1/1/2026, 9:00:00 AM".into())),
        );
        ViolationLedger::with_store(store, repo, SchedulerConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_mutation_is_mirrored() {
        let repo = Arc::new(InMemoryRepository::new());
        let ledger = ledger_on(repo.clone());

        let v = ledger.record(plate("ab-123"), None, "img").unwrap();
        let stored = repo.load().unwrap().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, ViolationStatus::Pending);

        ledger.confirm_payment(&v.id).unwrap();
        assert_eq!(repo.load().unwrap().unwrap()[0].status, ViolationStatus::Paid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_mutation_is_not_mirrored() {
        let repo = Arc::new(InMemoryRepository::new());
        let ledger = ledger_on(repo.clone());

        let err = ledger.confirm_payment(&ViolationId::new("missing")).unwrap_err();
        assert!(matches!(err, ViolationError::NotFound(_)));
        assert!(repo.blob().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_is_mirrored() {
        let repo = Arc::new(InMemoryRepository::new());
        let ledger = ledger_on(repo.clone());

        let v = ledger.record(plate("ab-123"), None, "img").unwrap();
        ledger.confirm_payment(&v.id).unwrap();

        tokio::time::sleep(Duration::from_millis(2_100)).await;

        assert_eq!(ledger.sweeps(), 1);
        assert_eq!(
            repo.load().unwrap().unwrap()[0].status,
            ViolationStatus::HelmetShipped
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_sweeps_leftover_paid_records() {
        let repo = Arc::new(InMemoryRepository::new());
        let first = ledger_on(repo.clone());
        let v = first.record(plate("xyz-9876"), None, "img").unwrap();
        first.confirm_payment(&v.id).unwrap();
        first.shutdown().await.unwrap();

        let second = ledger_on(repo.clone());
        assert_eq!(second.get(&v.id).unwrap().status, ViolationStatus::Paid);

        tokio::time::sleep(Duration::from_millis(2_100)).await;
        assert_eq!(
            second.get(&v.id).unwrap().status,
            ViolationStatus::HelmetShipped
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_slow_sweep_save_is_not_overtaken() {
        let repo = Arc::new(SlowShipmentRepository::default());
        let ledger = ViolationLedger::open(
            repo.clone(),
            FineSchedule::default(),
            SchedulerConfig::with_delay(Duration::from_millis(50)),
        );

        let a = ledger.record(plate("ab-123"), None, "img").unwrap();
        ledger.confirm_payment(&a.id).unwrap();

        // The sweep fires at 50ms and is still saving when the next record lands.
        tokio::time::sleep(Duration::from_millis(120)).await;
        ledger.record(plate("cd-456"), None, "img").unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;

        let durable = repo.load().unwrap().unwrap();
        assert_eq!(durable.len(), ledger.len());
        assert_eq!(durable, ledger.snapshot());
        assert_eq!(repo.saved_lens.lock().last(), Some(&2));
        ledger.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_offline_storage_keeps_desk_running() {
        let ledger = ViolationLedger::with_store(
            ViolationStore::with_ports(
                FineSchedule::default(),
                Arc::new(SequentialIdGenerator::new()),
                Arc::new(FixedClock("1/1/2026, 9:00:00 AM".into())),
            ),
            Arc::new(OfflineRepository),
            SchedulerConfig::default(),
        );
        assert!(ledger.is_empty());
        assert_eq!(ledger.persistence_failures(), 1);

        let v = ledger.record(plate("ab-123"), None, "img").unwrap();
        assert_eq!(ledger.confirm_payment(&v.id).unwrap().status, ViolationStatus::Paid);

        tokio::time::sleep(Duration::from_millis(2_100)).await;

        assert_eq!(ledger.sweeps(), 1);
        assert_eq!(
            ledger.get(&v.id).unwrap().status,
            ViolationStatus::HelmetShipped
        );
        // One failed load, then record, payment and sweep each failed to save.
        assert_eq!(ledger.persistence_failures(), 4);
        assert_eq!(ledger.stats().helmets_delivered, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_and_stats() {
        let ledger = ledger_on(Arc::new(InMemoryRepository::new()));
        ledger.record(plate("ab-123"), None, "img").unwrap();
        ledger.record(plate("cd-456"), None, "img").unwrap();
        ledger.record(plate("ab-123"), None, "img").unwrap();

        assert_eq!(ledger.search("ab").len(), 2);
        assert_eq!(ledger.history(&plate("AB-123"))[0].offense_count, 2);

        let stats = ledger.stats();
        assert_eq!(stats.total_violations, 3);
        assert_eq!(stats.pending_amount, 2_000 + 2_000 + 5_000);
    }
}
