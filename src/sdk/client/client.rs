//! Core API client implementation

use super::pipeline::{self, Outcome};
use super::session::{LogNavigator, LoginRedirect, Navigator, SessionStore};
use super::stats::{DeliveryStats, DeliveryStatsSnapshot};
use super::transport::{ReqwestTransport, Transport};
use super::types::{ApiRequest, AttemptState};
use crate::config::ClientConfig;
use crate::utils::error::{ClientError, Result};
use crate::utils::generate_request_id;
use crate::utils::net::limiter::{RateLimitPolicy, RateLimitStatus, RateLimiter};
use crate::utils::net::RetryConfig;
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Instrument, debug, error, info, info_span, warn};

/// Resilient wrapper around every backend call.
///
/// Attaches credentials, throttles mutations per endpoint, retries calls that got
/// no response, and reacts to rejected sessions.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    limiter: RateLimiter,
    mutation_policy: RateLimitPolicy,
    retry: RetryConfig,
    timeout: Duration,
    session: SessionStore,
    auth_handler: LoginRedirect,
    stats: Arc<DeliveryStats>,
}

impl ApiClient {
    /// Create a client backed by reqwest
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.http())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over any transport
    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let session = SessionStore::new();
        let auth_handler =
            LoginRedirect::new(session.clone(), Arc::new(LogNavigator), &config.login_route);

        info!(
            base_url = %config.base_url,
            max_retries = config.max_retries,
            "ApiClient created"
        );

        Self {
            base_url: config.base_url.clone(),
            transport,
            limiter: RateLimiter::new(),
            mutation_policy: config.mutation_limit.policy(),
            retry: config.retry(),
            timeout: config.timeout(),
            session,
            auth_handler,
            stats: Arc::new(DeliveryStats::default()),
        }
    }

    /// Route login redirects through `navigator`
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        let route = self.auth_handler.login_route().to_string();
        self.auth_handler = LoginRedirect::new(self.session.clone(), navigator, route);
        self
    }

    /// Share an existing credential store
    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self.auth_handler = LoginRedirect::new(
            self.session.clone(),
            self.auth_handler.navigator(),
            self.auth_handler.login_route().to_string(),
        );
        self
    }

    /// Share throttle records with other clients
    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Deliver `request` and decode the success payload into `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let request_id = generate_request_id();
        let span = info_span!(
            "api_request",
            request_id = %request_id,
            method = %request.method,
            path = %request.path,
        );

        async move {
            self.stats.record_request();
            let result = self
                .deliver(&request, &request_id)
                .await
                .and_then(|body| pipeline::decode(&body));

            match &result {
                Ok(_) => self.stats.record_success(),
                Err(e) => self.stats.record_failure(e),
            }
            result
        }
        .instrument(span)
        .await
    }

    /// [`ApiClient::execute`] into an untyped JSON value
    pub async fn execute_json(&self, request: ApiRequest) -> Result<serde_json::Value> {
        self.execute(request).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::get(path)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.execute(ApiRequest::post(path).serialize_body(body)?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.execute(ApiRequest::put(path).serialize_body(body)?).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.execute(ApiRequest::patch(path).serialize_body(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::delete(path)).await
    }

    async fn deliver(&self, request: &ApiRequest, request_id: &str) -> Result<Bytes> {
        let prepared = pipeline::prepare(&self.base_url, request, &self.session, request_id)?;
        pipeline::check_throttle(&self.limiter, &self.mutation_policy, request)?;

        let mut attempt = AttemptState::first(&self.retry);
        loop {
            debug!(attempt = attempt.attempt_number(), url = %prepared.url, "Sending request");
            let result = pipeline::send(self.transport.as_ref(), &prepared, self.timeout).await;

            match pipeline::classify_outcome(result) {
                Outcome::Success(body) => return Ok(body),
                Outcome::Failed(error) => {
                    if self.auth_handler.handle(&error) {
                        warn!("Request rejected as unauthenticated");
                    }
                    return Err(error);
                }
                Outcome::NoResponse(reason) => match attempt.next() {
                    Some(next) => {
                        warn!(
                            attempt = attempt.attempt_number(),
                            delay_ms = next.retry_delay.as_millis() as u64,
                            reason = %reason,
                            "No response, retrying"
                        );
                        self.stats.record_retry();
                        tokio::time::sleep(next.retry_delay).await;
                        attempt = next;
                    }
                    None => {
                        error!(
                            attempts = attempt.attempt_number(),
                            reason = %reason,
                            "Server unreachable, giving up"
                        );
                        return Err(ClientError::unreachable(attempt.attempt_number()));
                    }
                },
            }
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn stats(&self) -> DeliveryStatsSnapshot {
        self.stats.snapshot()
    }

    /// Throttle record of one endpoint key, e.g. `POST:/surveys`
    pub fn rate_limit_status(&self, key: &str) -> RateLimitStatus {
        self.limiter.get_status(key)
    }

    pub fn reset_rate_limits(&self) {
        self.limiter.reset_all();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("mutation_policy", &self.mutation_policy)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .field("auth_handler", &self.auth_handler)
            .finish_non_exhaustive()
    }
}
