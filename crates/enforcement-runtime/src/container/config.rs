//! # Desk Configuration
//!
//! Unified configuration for every component of the enforcement desk.
//!
//! ## Overrides
//!
//! Defaults are production values. `load_config()` applies `GUARDIA_*`
//! environment overrides on top; unparsable values are logged and ignored.

use std::path::PathBuf;
use std::time::Duration;

use gd_02_violation_store::{FineSchedule, FIRST_OFFENSE_FINE, SUBSEQUENT_FINE};
use gd_03_lifecycle_scheduler::{SchedulerConfig, DEFAULT_PROMOTION_DELAY_MS};
use gd_05_persistence::DEFAULT_BLOB_KEY;
use thiserror::Error;
use tracing::warn;

/// Simulated payment gateway round-trip.
pub const DEFAULT_PAYMENT_DELAY_MS: u64 = 1_500;

/// Complete desk configuration.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Fulfillment sweep configuration.
    pub lifecycle: LifecycleConfig,
    /// Payment gateway configuration.
    pub payment: PaymentConfig,
    /// Fine amounts.
    pub fines: FineConfig,
    /// Owner registry configuration.
    pub registry: RegistryConfig,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            lifecycle: LifecycleConfig::default(),
            payment: PaymentConfig::default(),
            fines: FineConfig::default(),
            registry: RegistryConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl DeskConfig {
    /// Validate configuration before the desk is assembled.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the promotion delay is zero
    /// - either fine amount is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lifecycle.promotion_delay_ms == 0 {
            return Err(ConfigError::ZeroPromotionDelay);
        }
        if self.fines.first_offense == 0 {
            return Err(ConfigError::ZeroFine {
                tier: "first offense",
            });
        }
        if self.fines.subsequent == 0 {
            return Err(ConfigError::ZeroFine { tier: "subsequent" });
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero delay would sweep payments before the operator sees them.
    #[error("Promotion delay must be non-zero. Set GUARDIA_PROMOTION_DELAY_MS.")]
    ZeroPromotionDelay,

    /// A fine tier is zero.
    #[error("The {tier} fine must be non-zero")]
    ZeroFine { tier: &'static str },
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the violation blob.
    pub data_dir: PathBuf,
    /// Blob name; the file is `<data_dir>/<blob_key>.json`.
    pub blob_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            blob_key: DEFAULT_BLOB_KEY.to_string(),
        }
    }
}

/// Fulfillment sweep configuration.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// Quiet period after the last change before PAID records are promoted.
    pub promotion_delay_ms: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            promotion_delay_ms: DEFAULT_PROMOTION_DELAY_MS,
        }
    }
}

impl LifecycleConfig {
    pub fn scheduler(&self) -> SchedulerConfig {
        SchedulerConfig::with_delay(Duration::from_millis(self.promotion_delay_ms))
    }
}

/// Payment gateway configuration.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Simulated gateway latency before a payment is confirmed.
    pub gateway_delay_ms: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            gateway_delay_ms: DEFAULT_PAYMENT_DELAY_MS,
        }
    }
}

impl PaymentConfig {
    pub fn gateway_delay(&self) -> Duration {
        Duration::from_millis(self.gateway_delay_ms)
    }
}

/// Fine amounts.
#[derive(Debug, Clone)]
pub struct FineConfig {
    /// Fine for a plate's first violation (includes the helmet).
    pub first_offense: u64,
    /// Fine for every later violation.
    pub subsequent: u64,
}

impl Default for FineConfig {
    fn default() -> Self {
        Self {
            first_offense: FIRST_OFFENSE_FINE,
            subsequent: SUBSEQUENT_FINE,
        }
    }
}

impl FineConfig {
    pub fn schedule(&self) -> FineSchedule {
        FineSchedule {
            first_offense: self.first_offense,
            subsequent: self.subsequent,
        }
    }
}

/// Owner registry configuration.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Simulated latency of the registry oracle.
    pub lookup_latency_ms: u64,
}

/// Load configuration from the process environment.
pub fn load_config() -> DeskConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary variable source.
pub fn load_config_from<F>(lookup: F) -> DeskConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = DeskConfig::default();

    if let Some(dir) = lookup("GUARDIA_DATA_DIR") {
        config.storage.data_dir = PathBuf::from(dir);
    }
    if let Some(level) = lookup("GUARDIA_LOG_LEVEL") {
        config.log_level = level;
    }

    override_u64(
        &lookup,
        "GUARDIA_PROMOTION_DELAY_MS",
        &mut config.lifecycle.promotion_delay_ms,
    );
    override_u64(
        &lookup,
        "GUARDIA_PAYMENT_DELAY_MS",
        &mut config.payment.gateway_delay_ms,
    );
    override_u64(
        &lookup,
        "GUARDIA_FIRST_OFFENSE_FINE",
        &mut config.fines.first_offense,
    );
    override_u64(
        &lookup,
        "GUARDIA_SUBSEQUENT_FINE",
        &mut config.fines.subsequent,
    );
    override_u64(
        &lookup,
        "GUARDIA_LOOKUP_LATENCY_MS",
        &mut config.registry.lookup_latency_ms,
    );

    config
}

fn override_u64<F>(lookup: &F, key: &str, slot: &mut u64)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => warn!("{} must be a non-negative integer, got {:?}", key, raw),
        }
    }
}
