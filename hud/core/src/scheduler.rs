//! Scheduler Adapter - Delayed Execution Without Cancellation
//!
//! The controller expresses every wait as a scheduled continuation; nothing
//! ever sleeps on the owner loop. There are deliberately no cancellation
//! handles: a scheduled action that fires for a superseded presentation dies
//! on its snapshot check instead. The cost is an O(1) timer callback that
//! fires into a no-op, which is cheaper bookkeeping than cancellable timers.
//!
//! Actions scheduled with a longer delay run after actions with a shorter
//! one, and actions scheduled with equal delays run in call order.

use std::time::Duration;

/// A deferred action
pub type ScheduledAction = Box<dyn FnOnce() + Send + 'static>;

/// Delayed execution contract
pub trait Scheduler: Send {
    /// Run `action` after at least `delay` has elapsed
    fn schedule(&self, delay: Duration, action: ScheduledAction);
}

/// Scheduler backed by the tokio timer
///
/// Each action runs on a spawned task after a `tokio::time::sleep`, so this
/// must be used from within a tokio runtime. Zero delays skip the sleep and
/// preserve call order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, action: ScheduledAction) {
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            action();
        });
    }
}
