//! Delivery statistics

use crate::utils::error::ClientError;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Counters kept by one client
#[derive(Debug, Default)]
pub struct DeliveryStats {
    requests: AtomicU64,
    successes: AtomicU64,
    retries: AtomicU64,
    rate_limited: AtomicU64,
    unauthenticated: AtomicU64,
    server_errors: AtomicU64,
    unreachable: AtomicU64,
    invalid: AtomicU64,
}

/// Point-in-time copy of [`DeliveryStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryStatsSnapshot {
    pub requests: u64,
    pub successes: u64,
    pub retries: u64,
    pub rate_limited: u64,
    pub unauthenticated: u64,
    pub server_errors: u64,
    pub unreachable: u64,
    pub invalid: u64,
}

impl DeliveryStats {
    pub(crate) fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_retry(&self) {
        self.retries.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a terminal failure under its class
    pub(crate) fn record_failure(&self, error: &ClientError) {
        let counter = match error {
            ClientError::RateLimitExceeded { .. } => &self.rate_limited,
            ClientError::Unauthenticated { .. } => &self.unauthenticated,
            ClientError::Server { .. } => &self.server_errors,
            ClientError::Unreachable { .. } => &self.unreachable,
            _ => &self.invalid,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DeliveryStatsSnapshot {
        let snapshot = DeliveryStatsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            retries: self.retries.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
            unauthenticated: self.unauthenticated.load(Ordering::Relaxed),
            server_errors: self.server_errors.load(Ordering::Relaxed),
            unreachable: self.unreachable.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
        };
        debug!(?snapshot, "Delivery stats read");
        snapshot
    }
}
