//! # Guardia Test Suite
//!
//! Cross-component scenarios that exercise the desk end to end.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs    # Deterministic desks and counting oracles
//!     ├── scenarios.rs   # Offense pricing and timed fulfillment
//!     └── restart.rs     # Persistence across desk restarts
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gd-tests
//! cargo test -p gd-tests integration::scenarios::
//! ```

pub mod integration;
