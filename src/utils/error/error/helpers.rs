//! Helper functions for creating and inspecting errors

use super::response::ErrorCode;
use super::types::ClientError;

impl ClientError {
    pub fn rate_limit(retry_after: u64) -> Self {
        Self::RateLimitExceeded { retry_after }
    }

    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn server<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn unreachable(attempts: u32) -> Self {
        Self::Unreachable { attempts }
    }

    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}

impl ClientError {
    /// Machine-readable code, only set for local rate-limit denials
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::RateLimitExceeded { .. } => Some(ErrorCode::RateLimitExceeded),
            _ => None,
        }
    }

    pub fn retry_after(&self) -> Option<u64> {
        match self {
            ClientError::RateLimitExceeded { retry_after } => Some(*retry_after),
            _ => None,
        }
    }

    /// HTTP status behind the error, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthenticated { .. } => Some(401),
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a later identical call may succeed without changes on the caller's side
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::RateLimitExceeded { .. } | ClientError::Unreachable { .. }
        )
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Unauthenticated { .. })
    }
}
