//! Network transport behind the delivery pipeline

use super::types::{PreparedRequest, RawResponse};
use crate::utils::error::Result;
use crate::utils::net::{ClientUtils, HttpClientConfig};
use async_trait::async_trait;
use thiserror::Error;
use tracing::trace;

/// Failure to obtain any response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Sent but nothing came back: refused connection, timeout, reset
    #[error("No response received: {0}")]
    NoResponse(String),
    /// Request could not be built
    #[error("Request could not be sent: {0}")]
    Request(String),
}

/// Sends one prepared request and reports whatever the server answered
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PreparedRequest) -> std::result::Result<RawResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: ClientUtils::create_http_client(config)?,
        })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &PreparedRequest) -> std::result::Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_reqwest_error)?;
        let status = response.status().as_u16();
        trace!(status, "Response headers received");

        // A body cut off mid-read is as good as no response
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

fn classify_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::Request(error.to_string())
    } else {
        TransportError::NoResponse(error.to_string())
    }
}
