mod types;
mod utils;

pub use types::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT, HttpClientConfig, RetryConfig,
};
pub use utils::ClientUtils;
