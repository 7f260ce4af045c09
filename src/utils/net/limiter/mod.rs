//! Client-side request throttling
//!
//! This module provides a per-endpoint sliding window throttle that escalates to a
//! temporary hard block once an endpoint overflows its window.

// Module declarations
mod limiter;
mod types;
mod utils;
mod window;


// Re-exports
pub use limiter::RateLimiter;
pub use types::{RateLimitPolicy, RateLimitResult, RateLimitStatus, SlidingWindow};
