//! Network and Client utilities
//!
//! This module provides HTTP client construction, request throttling, and call shaping.

pub mod client;
pub mod limiter;
pub mod shaping;

// Re-export commonly used types
pub use client::{ClientUtils, HttpClientConfig, RetryConfig};
pub use limiter::*;
pub use shaping::{Debouncer, IntervalThrottle};
