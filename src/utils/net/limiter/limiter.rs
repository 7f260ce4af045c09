//! Core RateLimiter implementation
//!
//! This module contains the main RateLimiter struct and its admission check.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::types::{RateLimitPolicy, RateLimitResult, SlidingWindow};

/// Per-endpoint sliding window throttle.
///
/// Cloning shares the underlying records, so one limiter can be handed to every
/// consumer of a client while keeping a single throttle state.
#[derive(Debug, Clone, Default)]
pub struct RateLimiter {
    /// Sliding windows keyed by endpoint key
    pub(super) windows: Arc<Mutex<HashMap<String, SlidingWindow>>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and record a call against `key` at the current instant
    pub fn check_limit(&self, key: &str, policy: &RateLimitPolicy) -> RateLimitResult {
        self.check_limit_at(key, policy, Instant::now())
    }

    /// Check and record a call against `key` at `now`.
    ///
    /// Denial of a full window escalates to a hard block for the whole
    /// `block_duration`; the first check after the block elapses starts from an
    /// empty window.
    ///
    /// `retry_after` on an overflow denial is an upper bound: it covers the longer of
    /// the window draining and the block, while the endpoint reopens once the block
    /// ends.
    pub fn check_limit_at(
        &self,
        key: &str,
        policy: &RateLimitPolicy,
        now: Instant,
    ) -> RateLimitResult {
        let mut windows = self.windows.lock();
        let window = windows.entry(key.to_string()).or_default();

        if let Some(blocked_until) = window.blocked_until {
            if now < blocked_until {
                let retry_after = ceil_secs(blocked_until - now);
                debug!(key, retry_after, "Endpoint still blocked");
                return RateLimitResult::denied("Endpoint temporarily blocked", retry_after);
            }

            debug!(key, "Block elapsed, starting a clean window");
            window.blocked_until = None;
            window.timestamps.clear();
        }

        window.prune(now, policy.time_window);

        if window.timestamps.len() >= policy.max_requests as usize {
            let window_wait = window
                .timestamps
                .first()
                .map(|&oldest| match oldest.checked_add(policy.time_window) {
                    Some(frees_at) => frees_at.saturating_duration_since(now),
                    None => policy.time_window,
                })
                .unwrap_or_default();
            let retry_after = ceil_secs(window_wait.max(policy.block_duration));
            window.blocked_until = Some(saturating_deadline(now, policy.block_duration));

            warn!(
                key,
                max_requests = policy.max_requests,
                retry_after,
                "Rate limit exceeded, blocking endpoint"
            );
            return RateLimitResult::denied("Rate limit exceeded", retry_after);
        }

        window.timestamps.push(now);
        window.total_admitted += 1;
        let remaining = policy
            .max_requests
            .saturating_sub(window.timestamps.len() as u32);

        debug!(key, remaining, "Request admitted");
        RateLimitResult::admitted(remaining)
    }
}

/// Deadline used when `now + duration` is not representable
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// `now + duration`, clamped to a far-future deadline instead of overflowing
pub(super) fn saturating_deadline(now: Instant, duration: Duration) -> Instant {
    now.checked_add(duration)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

/// Round a duration up to whole seconds
pub(super) fn ceil_secs(duration: Duration) -> u64 {
    duration
        .as_secs()
        .saturating_add(u64::from(duration.subsec_nanos() > 0))
}
