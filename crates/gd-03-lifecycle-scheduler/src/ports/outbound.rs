//! Outbound (Driven) ports for the Lifecycle Scheduler.

/// The collection the scheduler watches and sweeps.
///
/// Implementations must take their own lock; the scheduler calls these from
/// its background task.
pub trait PromotionTarget: Send + Sync + 'static {
    /// Number of records currently PAID.
    fn paid_count(&self) -> usize;

    /// Promote every record that is PAID right now. Returns how many moved.
    fn promote_paid(&self) -> usize;
}
