//! Delivery pipeline stages
//!
//! `ApiClient::execute` runs these in order:
//! `prepare (attach_auth) -> check_throttle -> send -> classify_outcome -> retry`.
//! Every stage except `send` is synchronous and side-effect free apart from the
//! throttle record it touches, so each can be exercised on its own.

use super::session::SessionStore;
use super::transport::{Transport, TransportError};
use super::types::{ApiRequest, PreparedRequest, RawResponse};
use crate::utils::error::{ClientError, Result};
use crate::utils::net::limiter::{RateLimitPolicy, RateLimitResult, RateLimiter};
use crate::utils::net::ClientUtils;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the per-call correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// What a single send amounted to
#[derive(Debug)]
pub enum Outcome {
    /// 2xx with its body
    Success(Bytes),
    /// Terminal failure, never retried
    Failed(ClientError),
    /// Nothing came back; the only retryable class
    NoResponse(String),
}

/// Add `Authorization: Bearer <token>` when a token is stored
pub fn attach_auth(headers: &mut HeaderMap, session: &SessionStore) -> Result<()> {
    if let Some(token) = session.token() {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(())
}

/// Resolve URL and headers for `request`
pub fn prepare(
    base_url: &str,
    request: &ApiRequest,
    session: &SessionStore,
    request_id: &str,
) -> Result<PreparedRequest> {
    let url = ClientUtils::build_url(base_url, &request.path)?;

    let mut headers = HeaderMap::new();
    for (name, value) in &request.headers {
        headers.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(request_id)?);
    attach_auth(&mut headers, session)?;

    Ok(PreparedRequest {
        request_id: request_id.to_string(),
        method: request.method.clone(),
        url,
        headers,
        body: request.body.clone(),
    })
}

/// Consult the throttle for mutating calls. Reads are exempt and return `Ok(None)`.
pub fn check_throttle(
    limiter: &RateLimiter,
    policy: &RateLimitPolicy,
    request: &ApiRequest,
) -> Result<Option<RateLimitResult>> {
    if request.is_read() {
        return Ok(None);
    }

    let key = request.endpoint_key();
    let result = limiter.check_limit(&key, policy);
    if result.allowed {
        return Ok(Some(result));
    }

    let retry_after = result.retry_after.unwrap_or(1);
    warn!(key = %key, retry_after, reason = %result.reason, "Request throttled locally");
    Err(ClientError::rate_limit(retry_after))
}

/// One transport call bounded by `timeout`; an elapsed timeout counts as no response
pub async fn send(
    transport: &dyn Transport,
    request: &PreparedRequest,
    timeout: Duration,
) -> std::result::Result<RawResponse, TransportError> {
    match tokio::time::timeout(timeout, transport.send(request)).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::NoResponse(format!(
            "timed out after {:?}",
            timeout
        ))),
    }
}

/// Sort a send result into success, terminal failure, or no response
pub fn classify_outcome(result: std::result::Result<RawResponse, TransportError>) -> Outcome {
    match result {
        Ok(response) if response.is_success() => Outcome::Success(response.body),
        Ok(response) => {
            let message = extract_error_message(response.status, &response.body);
            debug!(status = response.status, message = %message, "Server returned an error");
            if response.status == 401 {
                Outcome::Failed(ClientError::unauthenticated(message))
            } else {
                Outcome::Failed(ClientError::server(response.status, message))
            }
        }
        Err(TransportError::NoResponse(reason)) => Outcome::NoResponse(reason),
        Err(TransportError::Request(reason)) => {
            Outcome::Failed(ClientError::invalid_request(reason))
        }
    }
}

/// Human readable message from an error body.
///
/// Prefers `detail` (a string, or a list of `{msg}` validation entries), then
/// `message`, then a generic `Server error (<status>)`.
pub fn extract_error_message(status: u16, body: &[u8]) -> String {
    let fallback = || format!("Server error ({})", status);

    let Ok(payload) = serde_json::from_slice::<serde_json::Value>(body) else {
        return fallback();
    };

    match payload.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => {
            return detail.clone();
        }
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
        _ => {}
    }

    payload
        .get("message")
        .and_then(|message| message.as_str())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(fallback)
}

/// Decode a success body; an empty body decodes as JSON `null`
pub fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    Ok(serde_json::from_slice(body)?)
}
