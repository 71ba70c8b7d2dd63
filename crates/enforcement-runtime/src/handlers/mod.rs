//! # Operator Handlers
//!
//! Text front end over `EnforcementDesk`.

pub mod console;

pub use console::{Command, CommandError};
