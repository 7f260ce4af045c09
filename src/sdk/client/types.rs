//! Type definitions for the API client

use crate::utils::error::Result;
use crate::utils::net::RetryConfig;
use bytes::Bytes;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Request descriptor handed to [`ApiClient::execute`](super::ApiClient::execute)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
    /// Throttle key override, see [`ApiRequest::endpoint_key`]
    pub key_override: Option<String>,
}

impl ApiRequest {
    pub fn new<P: Into<String>>(method: Method, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
            key_override: None,
        }
    }

    pub fn get<P: Into<String>>(path: P) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post<P: Into<String>>(path: P) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put<P: Into<String>>(path: P) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch<P: Into<String>>(path: P) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete<P: Into<String>>(path: P) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` as the JSON payload
    pub fn serialize_body<B: Serialize>(self, body: &B) -> Result<Self> {
        Ok(self.json(serde_json::to_value(body)?))
    }

    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Use a fixed throttle key, e.g. `POST:/courses/{id}/evaluations`, instead of
    /// the interpolated path
    pub fn with_endpoint_key<K: Into<String>>(mut self, key: K) -> Self {
        self.key_override = Some(key.into());
        self
    }

    /// `METHOD:path` without the query string, unless overridden
    pub fn endpoint_key(&self) -> String {
        match &self.key_override {
            Some(key) => key.clone(),
            None => {
                let path = self.path.split('?').next().unwrap_or_default();
                format!("{}:{}", self.method, path)
            }
        }
    }

    /// Reads bypass the mutation throttle
    pub fn is_read(&self) -> bool {
        self.method == Method::GET
    }
}

/// Fully resolved request as handed to a [`Transport`](super::Transport)
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub request_id: String,
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of an answered request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new<B: Into<Bytes>>(status: u16, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retry bookkeeping for one outgoing call.
///
/// Immutable: [`AttemptState::next`] yields the following attempt instead of
/// mutating the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptState {
    pub retry_count: u32,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl AttemptState {
    pub fn first(config: &RetryConfig) -> Self {
        Self {
            retry_count: 0,
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
        }
    }

    /// The next attempt, or `None` once retries are exhausted
    pub fn next(&self) -> Option<Self> {
        (self.retry_count < self.max_retries).then(|| Self {
            retry_count: self.retry_count + 1,
            ..*self
        })
    }

    /// 1-based number of the send this state describes
    pub fn attempt_number(&self) -> u32 {
        self.retry_count + 1
    }
}
