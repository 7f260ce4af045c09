use std::collections::HashMap;
use std::time::Duration;

/// Per-attempt timeout, sized for a backend waking from a cold start
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);
/// Retries after the first attempt when no response arrives
pub const DEFAULT_MAX_RETRIES: u32 = 2;
/// Fixed pause between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("course-eval-client/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

/// Fixed-delay retry policy for calls that received no response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}
