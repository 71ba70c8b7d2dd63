//! Ports layer for persistence.

pub mod outbound;

pub use outbound::ViolationRepository;
