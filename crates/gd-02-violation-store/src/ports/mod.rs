//! Ports layer for the Violation Store.
//!
//! Only driven ports: the store needs fresh ids and display timestamps and
//! takes both from injected sources so tests stay deterministic.

pub mod outbound;

pub use outbound::*;
