//! # Restart Scenarios
//!
//! The desk is closed and reopened over the same JSON blob.
//!
//! ## Flows Tested
//!
//! 1. Records and their owner snapshots survive a restart unchanged
//! 2. Offense counting continues from the stored records
//! 3. A payment whose sweep never fired is swept after reopening
//! 4. A corrupt blob starts an empty desk that still works

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;
    use std::time::Duration;

    use gd_05_persistence::{JsonFileRepository, DEFAULT_BLOB_KEY};
    use shared_types::ViolationStatus;
    use tokio::time::sleep;

    use crate::integration::fixtures::{desk_on, CountingRegistry};

    fn repository(dir: &tempfile::TempDir) -> Arc<JsonFileRepository> {
        Arc::new(JsonFileRepository::new(dir.path(), DEFAULT_BLOB_KEY))
    }

    #[tokio::test(start_paused = true)]
    async fn test_records_survive_restart() {
        let dir = tempfile::tempdir().unwrap();

        let desk = desk_on(repository(&dir), Arc::new(CountingRegistry::default()));
        let first = desk.enter_manually("XYZ-9876").await.unwrap();
        desk.settle(&first.id).await.unwrap();
        sleep(Duration::from_millis(2_100)).await;
        let before = desk.log(None);
        desk.shutdown().await.unwrap();

        let reopened = desk_on(repository(&dir), Arc::new(CountingRegistry::default()));
        assert_eq!(reopened.log(None), before);
        assert_eq!(before[0].status, ViolationStatus::HelmetShipped);

        // The reopened store hands out ids from its own sequence; the first
        // one collides with the stored record and is skipped.
        let repeat = reopened.enter_manually("xyz-9876").await.unwrap();
        assert_ne!(repeat.id, first.id);
        assert_eq!(repeat.offense_count, 2);
        assert_eq!(repeat.fine_amount, 5_000);
        reopened.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_unswept_payment_completes_after_restart() {
        let dir = tempfile::tempdir().unwrap();

        let desk = desk_on(repository(&dir), Arc::new(CountingRegistry::default()));
        let v = desk.enter_manually("ABC-1234").await.unwrap();
        desk.settle(&v.id).await.unwrap();
        desk.shutdown().await.unwrap();

        let reopened = desk_on(repository(&dir), Arc::new(CountingRegistry::default()));
        assert_eq!(
            reopened.track(&v.id).unwrap().violation.status,
            ViolationStatus::Paid
        );

        sleep(Duration::from_millis(2_100)).await;
        assert_eq!(
            reopened.track(&v.id).unwrap().violation.status,
            ViolationStatus::HelmetShipped
        );
        reopened.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_corrupt_blob_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);
        fs::write(repo.path(), "[{\"broken\": true}").unwrap();

        let desk = desk_on(repo, Arc::new(CountingRegistry::default()));
        assert!(desk.log(None).is_empty());
        assert_eq!(desk.ledger().persistence_failures(), 1);

        desk.enter_manually("AB-123").await.unwrap();
        assert_eq!(desk.log(None).len(), 1);
        desk.shutdown().await.unwrap();
    }
}
