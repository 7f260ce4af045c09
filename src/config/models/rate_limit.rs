//! Rate limiting configuration

use crate::utils::net::limiter::RateLimitPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Throttle applied to mutating calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Calls admitted per window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Window length in seconds
    #[serde(default = "default_time_window_secs")]
    pub time_window_secs: u64,
    /// Block length in seconds once the window overflows
    #[serde(default = "default_block_duration_secs")]
    pub block_duration_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            time_window_secs: default_time_window_secs(),
            block_duration_secs: default_block_duration_secs(),
        }
    }
}

impl RateLimitSettings {
    pub fn policy(&self) -> RateLimitPolicy {
        RateLimitPolicy::new(
            self.max_requests,
            Duration::from_secs(self.time_window_secs),
            Duration::from_secs(self.block_duration_secs),
        )
    }
}

fn default_max_requests() -> u32 {
    20
}

fn default_time_window_secs() -> u64 {
    60
}

fn default_block_duration_secs() -> u64 {
    30
}
