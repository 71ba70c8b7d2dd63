//! Fine pricing.

/// First offense fine. Includes the cost of the helmet shipped on payment.
pub const FIRST_OFFENSE_FINE: u64 = 2000;

/// Repeat offense fine. Pure penalty.
pub const SUBSEQUENT_FINE: u64 = 5000;

/// Fine amounts by offense number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FineSchedule {
    pub first_offense: u64,
    pub subsequent: u64,
}

impl Default for FineSchedule {
    fn default() -> Self {
        Self {
            first_offense: FIRST_OFFENSE_FINE,
            subsequent: SUBSEQUENT_FINE,
        }
    }
}

impl FineSchedule {
    /// Fine for the `offense_count`-th violation of a plate (1-indexed).
    pub fn fine_for(&self, offense_count: u32) -> u64 {
        if offense_count <= 1 {
            self.first_offense
        } else {
            self.subsequent
        }
    }
}
