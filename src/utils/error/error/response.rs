//! Normalized failure shape handed to every consumer

use super::types::ClientError;
use serde::{Deserialize, Serialize};

/// Codes callers branch on for specialised UX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    RateLimitExceeded,
}

/// `{ message, code?, retry_after? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

impl From<&ClientError> for ErrorPayload {
    fn from(error: &ClientError) -> Self {
        Self {
            message: error.to_string(),
            code: error.code(),
            retry_after: error.retry_after(),
        }
    }
}

impl ClientError {
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload::from(self)
    }
}
