//! # Enforcement Scenarios
//!
//! Offense counting and pricing, payment, and the debounced fulfillment
//! sweep, driven through the desk as an operator would.
//!
//! ## Flows Tested
//!
//! 1. First offense: 2000, paid, helmet shipped after the quiet period
//! 2. Repeat offense: 5000, paid, booked as government revenue
//! 3. Two payments 500ms apart are promoted together by one sweep
//! 4. Owner lookups are memoized across records

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use enforcement_runtime::{CaptureOutcome, TrackingStage};
    use gd_02_violation_store::Fulfillment;
    use gd_05_persistence::InMemoryRepository;
    use shared_types::ViolationStatus;
    use tokio::time::sleep;

    use crate::integration::fixtures::{desk_on, CountingRegistry};

    // =========================================================================
    // OFFENSE LIFECYCLE
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_first_offense_ships_helmet() {
        let desk = desk_on(
            Arc::new(InMemoryRepository::new()),
            Arc::new(CountingRegistry::default()),
        );

        let CaptureOutcome::Recorded { violation, .. } =
            desk.process_capture("cam-2/frame-0042.jpg").await.unwrap()
        else {
            panic!("expected a recorded violation");
        };
        assert_eq!(violation.plate_number.as_str(), "AB-123");
        assert_eq!(violation.offense_count, 1);
        assert_eq!(violation.fine_amount, 2_000);
        assert_eq!(violation.status, ViolationStatus::Pending);

        let settlement = desk.settle(&violation.id).await.unwrap();
        assert_eq!(settlement.violation.status, ViolationStatus::Paid);
        assert_eq!(settlement.fulfillment, Fulfillment::HelmetDispatch);

        sleep(Duration::from_millis(1_900)).await;
        assert_eq!(
            desk.track(&violation.id).unwrap().stage,
            TrackingStage::Processing(Fulfillment::HelmetDispatch)
        );

        sleep(Duration::from_millis(200)).await;
        assert_eq!(
            desk.track(&violation.id).unwrap().violation.status,
            ViolationStatus::HelmetShipped
        );

        let stats = desk.overview().stats;
        assert_eq!(stats.helmets_delivered, 1);
        assert_eq!(stats.total_fines_collected, 2_000);
        assert_eq!(stats.government_revenue, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_offense_becomes_revenue() {
        let desk = desk_on(
            Arc::new(InMemoryRepository::new()),
            Arc::new(CountingRegistry::default()),
        );

        let first = desk.enter_manually("AB-123").await.unwrap();
        desk.settle(&first.id).await.unwrap();
        sleep(Duration::from_millis(2_100)).await;

        let second = desk.enter_manually("ab-123").await.unwrap();
        assert_eq!(second.offense_count, 2);
        assert_eq!(second.fine_amount, 5_000);
        assert_eq!(second.owner.as_ref().unwrap().total_violations, 2);

        let settlement = desk.settle(&second.id).await.unwrap();
        assert_eq!(settlement.fulfillment, Fulfillment::GovernmentRevenue);
        sleep(Duration::from_millis(2_100)).await;

        assert_eq!(
            desk.track(&second.id).unwrap().violation.status,
            ViolationStatus::GovernmentRevenue
        );
        assert_eq!(
            desk.track(&first.id).unwrap().violation.status,
            ViolationStatus::HelmetShipped
        );

        let stats = desk.overview().stats;
        assert_eq!(stats.total_violations, 2);
        assert_eq!(stats.total_fines_collected, 7_000);
        assert_eq!(stats.government_revenue, 5_000);
        assert_eq!(stats.helmets_delivered, 1);
        assert_eq!(stats.pending_fines, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_payments_close_together_share_one_sweep() {
        let desk = desk_on(
            Arc::new(InMemoryRepository::new()),
            Arc::new(CountingRegistry::default()),
        );
        let a = desk.enter_manually("AB-123").await.unwrap();
        let b = desk.enter_manually("CD-456").await.unwrap();
        let ledger = desk.ledger();

        ledger.confirm_payment(&a.id).unwrap();
        sleep(Duration::from_millis(500)).await;
        ledger.confirm_payment(&b.id).unwrap();

        // 1900ms after the second payment: the first payment's window has
        // long passed, but the debounce restarted.
        sleep(Duration::from_millis(1_900)).await;
        assert_eq!(ledger.get(&a.id).unwrap().status, ViolationStatus::Paid);
        assert_eq!(ledger.get(&b.id).unwrap().status, ViolationStatus::Paid);
        assert_eq!(ledger.sweeps(), 0);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(
            ledger.get(&a.id).unwrap().status,
            ViolationStatus::HelmetShipped
        );
        assert_eq!(
            ledger.get(&b.id).unwrap().status,
            ViolationStatus::HelmetShipped
        );
        assert_eq!(ledger.sweeps(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_record_restarts_pending_sweep() {
        let desk = desk_on(
            Arc::new(InMemoryRepository::new()),
            Arc::new(CountingRegistry::default()),
        );
        let a = desk.enter_manually("AB-123").await.unwrap();
        let ledger = desk.ledger();

        ledger.confirm_payment(&a.id).unwrap();
        sleep(Duration::from_millis(1_500)).await;
        desk.enter_manually("EF-789").await.unwrap();

        sleep(Duration::from_millis(1_500)).await;
        assert_eq!(ledger.get(&a.id).unwrap().status, ViolationStatus::Paid);

        sleep(Duration::from_millis(600)).await;
        assert_eq!(
            ledger.get(&a.id).unwrap().status,
            ViolationStatus::HelmetShipped
        );
    }

    // =========================================================================
    // OWNER LOOKUP
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_owner_lookup_memoized_across_records() {
        let registry = Arc::new(CountingRegistry::default());
        let desk = desk_on(Arc::new(InMemoryRepository::new()), registry.clone());

        let first = desk.enter_manually("KA-05-MX-1234").await.unwrap();
        let second = desk.enter_manually("ka-05-mx-1234").await.unwrap();

        assert_eq!(registry.calls(), 1);
        assert_eq!(first.owner.as_ref().unwrap().total_violations, 1);
        assert_eq!(second.owner.as_ref().unwrap().total_violations, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_plates_skip_registry() {
        let registry = Arc::new(CountingRegistry::default());
        let desk = desk_on(Arc::new(InMemoryRepository::new()), registry.clone());

        let v = desk.enter_manually("dl-4cn-0012").await.unwrap();

        assert_eq!(registry.calls(), 0);
        let owner = v.owner.unwrap();
        assert_eq!(owner.name, "Rahul Sharma");
        assert_eq!(owner.total_violations, 1);
    }
}
