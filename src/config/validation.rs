//! Configuration validation

use super::models::*;
use crate::utils::error::{ClientError, Result};
use crate::utils::net::ClientUtils;

/// Upper bound for throttle windows and blocks
pub const MAX_LIMIT_SECS: u64 = 24 * 60 * 60;

/// Validation for configuration sections
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for RateLimitSettings {
    fn validate(&self) -> Result<()> {
        if self.max_requests == 0 {
            return Err(ClientError::config(
                "mutation_limit.max_requests must be greater than 0",
            ));
        }
        if self.time_window_secs == 0 {
            return Err(ClientError::config(
                "mutation_limit.time_window_secs must be greater than 0",
            ));
        }
        if self.time_window_secs > MAX_LIMIT_SECS {
            return Err(ClientError::config(format!(
                "mutation_limit.time_window_secs must not exceed {}",
                MAX_LIMIT_SECS
            )));
        }
        if self.block_duration_secs > MAX_LIMIT_SECS {
            return Err(ClientError::config(format!(
                "mutation_limit.block_duration_secs must not exceed {}",
                MAX_LIMIT_SECS
            )));
        }
        Ok(())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        ClientUtils::validate_url(&self.base_url)
            .map_err(|e| ClientError::config(format!("base_url: {}", e)))?;

        if self.timeout_secs == 0 {
            return Err(ClientError::config("timeout_secs must be greater than 0"));
        }
        if !self.login_route.starts_with('/') {
            return Err(ClientError::config("login_route must start with '/'"));
        }
        for name in self.default_headers.keys() {
            reqwest::header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::config(format!("default_headers.{}: {}", name, e)))?;
        }

        self.mutation_limit.validate()
    }
}
