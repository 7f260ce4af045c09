//! Common test utilities for course-eval-client
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures::{ConfigFactory, TestBackend};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let backend = TestBackend::start().await;
//!     let client = backend.client(ConfigFactory::fast(&backend.uri()));
//!     // ...
//! }
//! ```


// Re-export commonly used items
pub use assertions::ErrorPayloadAssertions;
pub use fixtures::{ConfigFactory, RecordingNavigator, TestBackend, closed_port_url};
