//! Chart series for the overview screen.

use serde::{Deserialize, Serialize};
use shared_types::{PlateNumber, Violation};

use crate::stats::DashboardStats;

/// Bars shown on the settlement history chart.
pub const SETTLEMENT_HISTORY_LEN: usize = 10;

/// One bar of the settlement history chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementBar {
    pub plate_number: PlateNumber,
    pub fine_amount: u64,
    /// Paid (or fulfilled) rather than still pending.
    pub settled: bool,
}

/// The `limit` most recent records, oldest first so the chart reads left to
/// right. `records` must be newest first, as the store keeps them.
pub fn settlement_history(records: &[Violation], limit: usize) -> Vec<SettlementBar> {
    records
        .iter()
        .take(limit)
        .rev()
        .map(|v| SettlementBar {
            plate_number: v.plate_number.clone(),
            fine_amount: v.fine_amount,
            settled: v.status.is_settled(),
        })
        .collect()
}

/// Shipped helmets against fines still awaiting payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsSplit {
    pub shipped: u64,
    pub pending_payment: u64,
}

impl LogisticsSplit {
    /// Fraction of the split that has shipped, or `None` when both are zero.
    pub fn shipped_share(&self) -> Option<f64> {
        let total = self.shipped + self.pending_payment;
        (total > 0).then(|| self.shipped as f64 / total as f64)
    }
}

pub fn logistics_split(stats: &DashboardStats) -> LogisticsSplit {
    LogisticsSplit {
        shipped: stats.helmets_delivered,
        pending_payment: stats.pending_fines,
    }
}
