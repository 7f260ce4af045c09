//! Type conversions for ClientError

use super::types::ClientError;

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidRequest(format!("Invalid URL: {}", err))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ClientError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        ClientError::InvalidRequest(format!("Invalid header value: {}", err))
    }
}

impl From<reqwest::header::InvalidHeaderName> for ClientError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        ClientError::InvalidRequest(format!("Invalid header name: {}", err))
    }
}
