//! Sliding window bookkeeping

use std::time::Duration;
use tokio::time::Instant;

use super::types::SlidingWindow;

impl SlidingWindow {
    /// Drop timestamps that fell out of the window ending at `now`
    pub(super) fn prune(&mut self, now: Instant, window_size: Duration) {
        self.timestamps
            .retain(|&timestamp| now.saturating_duration_since(timestamp) < window_size);
    }

    /// Whether a block is in force at `now`
    pub fn is_blocked_at(&self, now: Instant) -> bool {
        self.blocked_until.is_some_and(|until| now < until)
    }
}
