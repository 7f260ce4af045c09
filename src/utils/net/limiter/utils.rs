//! Reset and introspection helpers for the rate limiter

use tokio::time::Instant;
use tracing::debug;

use super::limiter::RateLimiter;
use super::types::RateLimitStatus;

impl RateLimiter {
    /// Forget everything recorded for `key`
    pub fn reset(&self, key: &str) {
        if self.windows.lock().remove(key).is_some() {
            debug!(key, "Rate limit record reset");
        }
    }

    /// Forget every record
    pub fn reset_all(&self) {
        let mut windows = self.windows.lock();
        let cleared = windows.len();
        windows.clear();
        debug!(cleared, "All rate limit records reset");
    }

    /// Snapshot of `key` at the current instant
    pub fn get_status(&self, key: &str) -> RateLimitStatus {
        self.get_status_at(key, Instant::now())
    }

    /// Snapshot of `key` at `now`. Does not prune or clear anything.
    pub fn get_status_at(&self, key: &str, now: Instant) -> RateLimitStatus {
        let windows = self.windows.lock();
        match windows.get(key) {
            Some(window) => RateLimitStatus {
                is_blocked: window.is_blocked_at(now),
                blocked_until: window.blocked_until,
                request_count: window.total_admitted,
                recent_requests: window.timestamps.len(),
            },
            None => RateLimitStatus::default(),
        }
    }

    /// Keys that currently hold a record
    pub fn tracked_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.windows.lock().keys().cloned().collect();
        keys.sort();
        keys
    }
}
