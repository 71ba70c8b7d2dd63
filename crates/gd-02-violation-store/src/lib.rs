//! # GD-02 Violation Store
//!
//! The authoritative in-memory collection of violation records.
//!
//! ## Purpose
//!
//! Creates records (offense counting, fine pricing, owner snapshot), and moves
//! them forward through the payment/fulfillment state machine.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Unique ids | `domain/store.rs` - `create()` retry, `rehydrate()` check |
//! | Offense count = prior same-plate records + 1 | `domain/store.rs` - `create()` |
//! | Fine fixed at creation | `domain/pricing.rs` - `FineSchedule::fine_for()` |
//! | Forward-only status | `domain/transitions.rs` - `is_legal_transition()` |
//! | Append-only, newest first | `domain/store.rs` - records only prepended |
//!
//! ## Lifecycle
//!
//! ```text
//! [PENDING] ──confirm_payment──→ [PAID] ──promote_paid──→ [HELMET_SHIPPED]      (offense 1)
//!                                          └────────────→ [GOVERNMENT_REVENUE]  (offense > 1)
//! ```
//!
//! | Stage | Method | Effect |
//! |-------|--------|--------|
//! | Create | `store.create()` | New PENDING record, prepended |
//! | Pay | `store.confirm_payment()` | PENDING → PAID, the only route into PAID |
//! | Sweep | `store.promote_paid()` | Every PAID record → its terminal state |
//!
//! ## Module Structure
//!
//! ```text
//! domain/store.rs       - ViolationStore
//! domain/pricing.rs     - FineSchedule
//! domain/transitions.rs - legal edges, Fulfillment branch
//! domain/errors.rs      - ViolationError
//! ports/outbound.rs     - IdGenerator, Clock
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
