//! Utility modules for the API client
//!
//! ## Module Organization
//!
//! - **net**: HTTP client construction, endpoint throttling, call shaping
//! - **error**: Error taxonomy and the normalized failure payload
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;
pub mod net;

pub use error::{ClientError, ErrorCode, ErrorPayload, Result};
pub use net::{ClientUtils, HttpClientConfig, RetryConfig};

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
