//! Client SDK for the course evaluation backend
//!
//! Views call the backend through [`ApiClient`]; it owns the session, the mutation
//! throttle and the retry policy so individual screens don't have to.

pub mod client;

// Re-exports for convenience
pub use client::{
    ApiClient, ApiRequest, LogNavigator, LoginRedirect, Navigator, ReqwestTransport,
    SessionStore, Transport, TransportError,
};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
