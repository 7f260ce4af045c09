//! Configuration data models

mod rate_limit;

pub use rate_limit::RateLimitSettings;

use crate::utils::net::client::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT};
use crate::utils::net::{HttpClientConfig, RetryConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retries after the first attempt when no response arrives
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Fixed delay between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Throttle for non-GET calls
    #[serde(default)]
    pub mutation_limit: RateLimitSettings,
    /// Route opened when the session is rejected
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Headers sent with every request, e.g. a tenant or term marker
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            mutation_limit: RateLimitSettings::default(),
            login_route: default_login_route(),
            user_agent: None,
            default_headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.max_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    pub fn http(&self) -> HttpClientConfig {
        let mut http = HttpClientConfig {
            timeout: self.timeout(),
            default_headers: self.default_headers.clone(),
            ..Default::default()
        };
        if let Some(user_agent) = &self.user_agent {
            http.user_agent = user_agent.clone();
        }
        http
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY.as_millis() as u64
}

fn default_login_route() -> String {
    "/login".to_string()
}
