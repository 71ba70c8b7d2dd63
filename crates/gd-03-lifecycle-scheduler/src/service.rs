//! Lifecycle Scheduler Service
//!
//! Background task that owns the debounce window and runs the sweep.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::domain::{DebounceWindow, SchedulerConfig};
use crate::error::SchedulerError;
use crate::ports::PromotionTarget;

/// Messages from handle to task.
#[derive(Debug)]
enum Command {
    /// The collection changed; re-evaluate the PAID set.
    Changed,
    /// Stop the task.
    Shutdown,
}

/// Spawns the scheduler task.
pub struct LifecycleScheduler;

impl LifecycleScheduler {
    /// Start the scheduler on the current tokio runtime.
    ///
    /// The task only holds a weak reference to `target`; once the target is
    /// dropped a due sweep ends the task instead of promoting anything.
    pub fn spawn<T: PromotionTarget>(target: &Arc<T>, config: SchedulerConfig) -> SchedulerHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let sweeps = Arc::new(AtomicU64::new(0));

        info!(
            "[gd-03] Starting lifecycle scheduler (delay {}ms)",
            config.promotion_delay.as_millis()
        );

        let task = tokio::spawn(run(
            Arc::downgrade(target),
            rx,
            DebounceWindow::new(config.promotion_delay),
            Arc::clone(&sweeps),
        ));

        SchedulerHandle { tx, task, sweeps }
    }
}

/// Handle to a running scheduler.
///
/// Dropping the handle closes the channel, which stops the task.
#[derive(Debug)]
pub struct SchedulerHandle {
    tx: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
    sweeps: Arc<AtomicU64>,
}

impl SchedulerHandle {
    /// Report that the collection changed.
    pub fn notify(&self) -> Result<(), SchedulerError> {
        self.tx
            .send(Command::Changed)
            .map_err(|_| SchedulerError::Stopped)
    }

    /// Number of sweeps fired so far.
    pub fn sweeps(&self) -> u64 {
        self.sweeps.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the task and wait for it to exit. A pending sweep is dropped.
    pub async fn shutdown(self) -> Result<(), SchedulerError> {
        // The task may already be gone; joining still reports how it ended.
        let _ = self.tx.send(Command::Shutdown);
        self.task
            .await
            .map_err(|e| SchedulerError::TaskFailed(e.to_string()))
    }
}

async fn run<T: PromotionTarget>(
    target: Weak<T>,
    mut rx: mpsc::UnboundedReceiver<Command>,
    mut window: DebounceWindow,
    sweeps: Arc<AtomicU64>,
) {
    loop {
        // Disabled branches still evaluate their future, so give it a value.
        let deadline = window.deadline().unwrap_or_else(Instant::now);

        tokio::select! {
            command = rx.recv() => match command {
                Some(Command::Changed) => {
                    let Some(target) = target.upgrade() else { break };
                    let paid = target.paid_count();
                    if paid == 0 {
                        if window.is_armed() {
                            debug!("[gd-03] No paid records left, sweep cancelled");
                        }
                        window.disarm();
                    } else {
                        window.rearm(Instant::now());
                        debug!(
                            "[gd-03] {} paid records, sweep re-armed for {}ms",
                            paid,
                            window.delay().as_millis()
                        );
                    }
                }
                Some(Command::Shutdown) | None => break,
            },
            _ = tokio::time::sleep_until(deadline), if window.is_armed() => {
                if !window.fire(Instant::now()) {
                    continue;
                }
                let Some(target) = target.upgrade() else { break };
                let promoted = target.promote_paid();
                let count = sweeps.fetch_add(1, Ordering::SeqCst) + 1;
                info!("[gd-03] Sweep #{} promoted {} records", count, promoted);
            }
        }
    }

    info!("[gd-03] Lifecycle scheduler stopped");
}
