//! Configuration loading utilities
//!
//! This module provides utilities for loading configuration from the environment
//! and from YAML files.

use super::models::ClientConfig;
use crate::utils::error::{ClientError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Backend base URL
pub const ENV_API_URL: &str = "COURSE_EVAL_API_URL";
/// Per-attempt timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "COURSE_EVAL_TIMEOUT_SECS";
/// Retries after the first attempt
pub const ENV_MAX_RETRIES: &str = "COURSE_EVAL_MAX_RETRIES";
/// Delay between attempts in milliseconds
pub const ENV_RETRY_DELAY_MS: &str = "COURSE_EVAL_RETRY_DELAY_MS";

impl ClientConfig {
    /// Apply environment overrides on top of `self`
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_API_URL) {
            debug!(base_url = %base_url, "Base URL taken from environment");
            self.base_url = base_url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_var(ENV_TIMEOUT_SECS, &timeout)?;
        }
        if let Some(retries) = lookup(ENV_MAX_RETRIES) {
            self.max_retries = parse_var(ENV_MAX_RETRIES, &retries)?;
        }
        if let Some(delay) = lookup(ENV_RETRY_DELAY_MS) {
            self.retry_delay_ms = parse_var(ENV_RETRY_DELAY_MS, &delay)?;
        }
        Ok(self)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ClientError::config(format!("Invalid {}: {}", name, e)))
}
