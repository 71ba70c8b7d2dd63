//! Status edges.
//!
//! Exactly three edges exist. Which terminal a PAID record reaches is decided
//! by its offense count, so `PAID -> HELMET_SHIPPED` is illegal for a repeat
//! offense and `PAID -> GOVERNMENT_REVENUE` is illegal for a first one.

use shared_types::{Violation, ViolationStatus};

/// What a settled fine pays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fulfillment {
    /// First offense: a helmet is dispatched to the registered address.
    HelmetDispatch,
    /// Repeat offense: the fine is booked as government revenue.
    GovernmentRevenue,
}

impl Fulfillment {
    pub fn for_offense(offense_count: u32) -> Self {
        if offense_count == 1 {
            Self::HelmetDispatch
        } else {
            Self::GovernmentRevenue
        }
    }

    /// Terminal status reached once this fulfillment completes.
    pub fn terminal_status(self) -> ViolationStatus {
        match self {
            Self::HelmetDispatch => ViolationStatus::HelmetShipped,
            Self::GovernmentRevenue => ViolationStatus::GovernmentRevenue,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::HelmetDispatch => "helmet shipment to the registered address",
            Self::GovernmentRevenue => "penalty booked for road infrastructure",
        }
    }
}

/// Whether `record` may move to `to`.
pub fn is_legal_transition(record: &Violation, to: ViolationStatus) -> bool {
    match (record.status, to) {
        (ViolationStatus::Pending, ViolationStatus::Paid) => true,
        (ViolationStatus::Paid, target) if target.is_terminal() => {
            target == Fulfillment::for_offense(record.offense_count).terminal_status()
        }
        _ => false,
    }
}
