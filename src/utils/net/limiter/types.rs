//! Rate limiting types and data structures
//!
//! This module defines the core types used for per-endpoint throttling.

use std::time::Duration;
use tokio::time::Instant;

/// Admission policy for one endpoint key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Calls admitted per window
    pub max_requests: u32,
    /// Length of the sliding window
    pub time_window: Duration,
    /// Hard block applied after the window overflows
    pub block_duration: Duration,
}

impl RateLimitPolicy {
    pub fn new(max_requests: u32, time_window: Duration, block_duration: Duration) -> Self {
        Self {
            max_requests,
            time_window,
            block_duration,
        }
    }

    /// Policy applied to every non-GET call: 20 per minute, 30s cooldown
    pub fn mutation_default() -> Self {
        Self::new(20, Duration::from_secs(60), Duration::from_secs(30))
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::mutation_default()
    }
}

/// Sliding window record kept per endpoint key
#[derive(Debug, Clone, Default)]
pub struct SlidingWindow {
    /// Admission instants, oldest first
    pub timestamps: Vec<Instant>,
    /// While `now < blocked_until` every call is denied
    pub blocked_until: Option<Instant>,
    /// Diagnostic counter, never consulted for admission
    pub total_admitted: u64,
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Human readable explanation
    pub reason: String,
    /// Whole seconds to wait, set only on denial
    pub retry_after: Option<u64>,
    /// Calls left in the current window, set only on admission
    pub remaining: Option<u32>,
}

impl RateLimitResult {
    pub(super) fn admitted(remaining: u32) -> Self {
        Self {
            allowed: true,
            reason: "Request allowed".to_string(),
            retry_after: None,
            remaining: Some(remaining),
        }
    }

    pub(super) fn denied<S: Into<String>>(reason: S, retry_after: u64) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
            retry_after: Some(retry_after),
            remaining: None,
        }
    }
}

/// Read-only snapshot of one endpoint's throttle state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RateLimitStatus {
    pub is_blocked: bool,
    pub blocked_until: Option<Instant>,
    /// Calls admitted since the record was created
    pub request_count: u64,
    /// Timestamps currently held in the window
    pub recent_requests: usize,
}
