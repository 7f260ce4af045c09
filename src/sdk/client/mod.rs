//! API client module
//!
//! This module provides the resilient delivery wrapper used for every backend call:
//! credential attachment, per-endpoint mutation throttling, bounded retries for calls
//! that got no response, and the login redirect on rejected sessions.

mod client;
pub mod pipeline;
mod session;
mod stats;
mod transport;
mod types;


// Re-export public types and the main client
pub use client::ApiClient;
pub use session::{LogNavigator, LoginRedirect, Navigator, Session, SessionStore};
pub use stats::{DeliveryStats, DeliveryStatsSnapshot};
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::{ApiRequest, AttemptState, PreparedRequest, RawResponse};
