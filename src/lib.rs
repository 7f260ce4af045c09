//! # course-eval-client
//!
//! Resilient API client for the course evaluation dashboard.
//!
//! ## Features
//!
//! - **Endpoint Throttling**: Sliding window per `METHOD:path` key for mutating calls,
//!   escalating to a temporary block when a window overflows
//! - **Cold-Start Retries**: Calls that get no response are retried with a fixed delay
//!   before the server is reported as unreachable
//! - **Session Handling**: Bearer token attachment and login redirect on rejection
//! - **Normalized Errors**: Every failure maps to one payload shape
//! - **Call Shaping**: Trailing-edge debounce and leading-edge interval throttle
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use course_eval_client::{ApiClient, ClientConfig};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(&ClientConfig::from_env()?)?;
//!     client.session().set_token("eyJhbGciOi...");
//!
//!     let courses: serde_json::Value = client.get("/courses").await?;
//!     println!("{}", courses);
//!
//!     let _: serde_json::Value = client
//!         .post("/courses/12/evaluations", &json!({"score": 5}))
//!         .await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod sdk;
pub mod utils;

// Re-export main types
pub use config::{ClientConfig, RateLimitSettings, Validate};
pub use sdk::client::{
    ApiClient, ApiRequest, DeliveryStatsSnapshot, LogNavigator, LoginRedirect, Navigator,
    RawResponse, ReqwestTransport, SessionStore, Transport, TransportError,
};
pub use utils::error::{ClientError, ErrorCode, ErrorPayload, Result};
pub use utils::logging::init_logging;
pub use utils::net::limiter::{RateLimitPolicy, RateLimitResult, RateLimitStatus, RateLimiter};
pub use utils::net::shaping::{Debouncer, IntervalThrottle};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub rust_version: &'static str,
}

/// Get build information
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        rust_version: env!("CARGO_PKG_RUST_VERSION"),
    }
}
