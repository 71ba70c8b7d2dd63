//! # Desk Assembly
//!
//! Components are built leaf-first:
//!
//! ```text
//! Phase 1: Persistence (JSON file repository)
//! Phase 2: Ledger (store rehydrated from persistence, scheduler spawned)
//! Phase 3: Owner directory (seeded registry, synthetic registry oracle)
//! Phase 4: Classifier
//! ```

use std::sync::Arc;
use std::time::Duration;

use gd_01_owner_directory::{OwnerDirectory, SyntheticRegistryOracle};
use gd_05_persistence::JsonFileRepository;
use tracing::info;

use crate::adapters::SyntheticClassifier;
use crate::container::config::{ConfigError, DeskConfig};
use crate::desk::EnforcementDesk;
use crate::ledger::ViolationLedger;

/// Build a desk from validated configuration.
///
/// Must run inside a tokio runtime; the ledger spawns its scheduler there.
pub fn assemble(config: &DeskConfig) -> Result<EnforcementDesk, ConfigError> {
    config.validate()?;

    info!("Phase 1: Opening violation storage");
    let repository = Arc::new(JsonFileRepository::new(
        &config.storage.data_dir,
        &config.storage.blob_key,
    ));
    info!("  [05] Persistence at {}", repository.path().display());

    info!("Phase 2: Opening violation ledger");
    let ledger = ViolationLedger::open(
        repository,
        config.fines.schedule(),
        config.lifecycle.scheduler(),
    );
    info!("  [02] {} violation records loaded", ledger.len());
    info!(
        "  [03] Fulfillment sweep after {}ms of quiet",
        config.lifecycle.promotion_delay_ms
    );

    info!("Phase 3: Initializing owner directory");
    let oracle = Arc::new(SyntheticRegistryOracle::with_latency(Duration::from_millis(
        config.registry.lookup_latency_ms,
    )));
    let directory = Arc::new(OwnerDirectory::new(oracle));
    info!("  [01] Owner directory ready");

    info!("Phase 4: Initializing classifier");
    let classifier = Arc::new(SyntheticClassifier::new());

    Ok(EnforcementDesk::new(
        ledger,
        directory,
        classifier,
        config.payment.gateway_delay(),
    ))
}
