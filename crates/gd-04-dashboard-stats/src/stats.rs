//! Dashboard metrics.
//!
//! "Collected" means "not pending": a PAID record still awaiting its sweep is
//! already counted in `total_fines_collected`. `government_revenue` is a
//! subset of `total_fines_collected`, never an addition to it.
//!
//! Amount sums saturate at `u64::MAX`.

use serde::{Deserialize, Serialize};
use shared_types::{Violation, ViolationStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_violations: u64,
    pub total_fines_collected: u64,
    pub helmets_delivered: u64,
    pub government_revenue: u64,
    pub pending_fines: u64,
    pub pending_amount: u64,
}

impl DashboardStats {
    /// Sum of every fine, settled or not.
    pub fn total_assessed(&self) -> u64 {
        self.total_fines_collected.saturating_add(self.pending_amount)
    }

    fn absorb(mut self, violation: &Violation) -> Self {
        self.total_violations += 1;

        if violation.status.is_settled() {
            self.total_fines_collected = self
                .total_fines_collected
                .saturating_add(violation.fine_amount);
        } else {
            self.pending_fines += 1;
            self.pending_amount = self.pending_amount.saturating_add(violation.fine_amount);
        }

        match violation.status {
            ViolationStatus::HelmetShipped => self.helmets_delivered += 1,
            ViolationStatus::GovernmentRevenue => {
                self.government_revenue = self
                    .government_revenue
                    .saturating_add(violation.fine_amount)
            }
            ViolationStatus::Pending | ViolationStatus::Paid => {}
        }

        self
    }
}

/// Single-pass, order-independent reduction. Empty input yields zeros.
pub fn compute<'a, I>(violations: I) -> DashboardStats
where
    I: IntoIterator<Item = &'a Violation>,
{
    violations
        .into_iter()
        .fold(DashboardStats::default(), DashboardStats::absorb)
}
