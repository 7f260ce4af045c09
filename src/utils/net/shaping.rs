//! Call-rate shaping for interactive inputs
//!
//! `Debouncer` collapses a burst of calls into the last one, `IntervalThrottle`
//! lets one call through per interval. Both sit in front of the API client, e.g.
//! a search box feeding requests, and keep no state beyond their own instance.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

/// Runs the callback `wait` after the most recent call, with that call's arguments.
///
/// Scheduling spawns onto the current Tokio runtime.
pub struct Debouncer<T> {
    wait: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Cancel any pending call and schedule `args` for delivery after `wait`
    pub fn call(&self, args: T) {
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(args);
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            trace!("Debounced call superseded");
            previous.abort();
        }
    }

    /// Drop the pending call, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

/// Leading-edge gate: the first call runs immediately, later calls are dropped
/// until `limit` has passed since the last run.
pub struct IntervalThrottle<F> {
    limit: Duration,
    callback: F,
    last_run: Mutex<Option<Instant>>,
}

impl<F> IntervalThrottle<F> {
    pub fn new(limit: Duration, callback: F) -> Self {
        Self {
            limit,
            callback,
            last_run: Mutex::new(None),
        }
    }

    /// Returns whether the callback ran
    pub fn call<T>(&self, args: T) -> bool
    where
        F: Fn(T),
    {
        let now = Instant::now();
        {
            let mut last_run = self.last_run.lock();
            if last_run.is_some_and(|last| now.saturating_duration_since(last) < self.limit) {
                trace!("Throttled call suppressed");
                return false;
            }
            *last_run = Some(now);
        }

        (self.callback)(args);
        true
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}
