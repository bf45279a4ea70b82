//! Turn-boundary scheduling abstraction for cache clearing.
//!
//! This module provides a [`TickScheduler`] trait so the classifier can
//! defer its cache-clearing callback to the end of the current execution
//! unit without depending on a concrete runtime, and so tests can drive
//! turn boundaries deterministically.

use std::sync::Once;

use tokio::runtime::{Handle, RuntimeFlavor};

/// Abstraction over "run this after the current synchronous turn".
///
/// Implementations post `task` onto a task queue; it must run after the
/// calling execution unit completes, and once scheduled it always runs.
/// This is a task-queue post, not a timer.
pub trait TickScheduler: Send + Sync {
    /// Defers `task` to the next turn of the scheduler.
    fn defer(&self, task: Box<dyn FnOnce() + Send>);
}

static MULTI_THREAD_WARNING: Once = Once::new();

/// Production scheduler posting onto the current tokio runtime's task queue.
///
/// On a current-thread runtime the spawned task cannot run before the
/// calling task reaches an await point, so everything done synchronously
/// after [`defer`](TickScheduler::defer) still belongs to the same turn.
///
/// A multi-thread runtime has no turn boundary: a spawned task may run on
/// another worker while the caller is still mid-turn. Rather than race,
/// `defer` on a multi-thread runtime runs the task immediately on the
/// caller (zero-length turns, as with [`InlineScheduler`]) and logs a
/// warning once. Use a current-thread runtime to get coalescing.
///
/// # Panics
///
/// `defer` panics if called outside a tokio runtime; use
/// [`InlineScheduler`] from non-async code.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl TickScheduler for TokioScheduler {
    fn defer(&self, task: Box<dyn FnOnce() + Send>) {
        let handle = Handle::current();
        if matches!(handle.runtime_flavor(), RuntimeFlavor::CurrentThread) {
            handle.spawn(async move { task() });
        } else {
            // A spawned task could run on another worker and tear down
            // state while the calling turn is still live. Run it now
            // instead: deterministic, at the cost of coalescing.
            MULTI_THREAD_WARNING.call_once(|| {
                tracing::warn!(
                    "multi-thread tokio runtime has no turn boundary; deferred tasks run inline"
                );
            });
            task();
        }
    }
}

/// Scheduler that runs the deferred task immediately, on the caller.
///
/// Every turn is zero-length under this scheduler, so cached state never
/// survives past the call that produced it. Intended for synchronous
/// callers that do not want coalescing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineScheduler;

impl TickScheduler for InlineScheduler {
    fn defer(&self, task: Box<dyn FnOnce() + Send>) {
        task();
    }
}
