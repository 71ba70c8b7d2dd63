//! Ports Layer
//!
//! - Driving Ports (inbound) - API for the enforcement desk
//! - Driven Ports (outbound) - the external owner registry

pub mod inbound;
pub mod outbound;

pub use inbound::OwnerDirectoryApi;
pub use outbound::OwnerRegistryOracle;
