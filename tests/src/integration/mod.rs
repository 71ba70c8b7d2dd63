//! Integration scenarios across the owner directory, violation store,
//! lifecycle scheduler, dashboard stats and persistence.
//!
//! Every timed test runs on tokio's paused clock.

#[cfg(test)]
mod fixtures;
mod restart;
mod scenarios;
