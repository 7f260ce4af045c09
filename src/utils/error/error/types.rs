//! Error types for the API client

use thiserror::Error;

/// Result type alias for the API client
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message surfaced once retries against an unresponsive backend are exhausted
pub const SERVER_STARTING_MESSAGE: &str =
    "Unable to reach the server. It may be starting up, please try again in a moment.";

/// Main error type for the API client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Local throttle denied a mutating call before it reached the network
    #[error("Too many requests. Please wait {retry_after} seconds before trying again.")]
    RateLimitExceeded {
        /// Whole seconds until the endpoint accepts calls again
        retry_after: u64,
    },

    /// Server answered 401
    #[error("{message}")]
    Unauthenticated { message: String },

    /// Server answered with any other error status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No response after every retry attempt
    #[error("{}", SERVER_STARTING_MESSAGE)]
    Unreachable {
        /// Total send attempts, first try included
        attempts: u32,
    },

    /// Request could not be built or sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}
