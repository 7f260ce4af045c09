//! Stored credentials and the reaction to a rejected session

use crate::utils::error::ClientError;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Bearer token sent with every request
    pub token: Option<String>,
    /// Signed-in user as returned by the backend
    pub identity: Option<serde_json::Value>,
}

/// Shared credential store; clones observe the same session
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token<S: Into<String>>(token: S) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }

    pub fn set_token<S: Into<String>>(&self, token: S) {
        self.inner.write().token = Some(token.into());
    }

    pub fn set_identity(&self, identity: serde_json::Value) {
        self.inner.write().identity = Some(identity);
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn identity(&self) -> Option<serde_json::Value> {
        self.inner.read().identity.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().token.is_some()
    }

    /// Forget token and identity
    pub fn clear(&self) {
        *self.inner.write() = Session::default();
    }
}

/// Moves the user to another screen
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}

/// Navigator for headless use: records the request in the log only
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to(&self, route: &str) {
        info!(route, "Navigation requested");
    }
}

/// Adapter run after the pipeline classified a call as unauthenticated
#[derive(Clone)]
pub struct LoginRedirect {
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl LoginRedirect {
    pub fn new<S: Into<String>>(
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        login_route: S,
    ) -> Self {
        Self {
            session,
            navigator,
            login_route: login_route.into(),
        }
    }

    /// Clear credentials and open the login route if `error` is an auth failure.
    /// Returns whether it acted.
    pub fn handle(&self, error: &ClientError) -> bool {
        if !error.is_auth_error() {
            return false;
        }

        warn!(route = %self.login_route, "Session rejected, clearing credentials");
        self.session.clear();
        self.navigator.navigate_to(&self.login_route);
        true
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub fn navigator(&self) -> Arc<dyn Navigator> {
        Arc::clone(&self.navigator)
    }
}

impl std::fmt::Debug for LoginRedirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRedirect")
            .field("login_route", &self.login_route)
            .finish_non_exhaustive()
    }
}
