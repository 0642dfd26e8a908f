//! # Authentication operations
//!
//! Register and login both return the same shape: a bearer token plus the
//! user it belongs to. On success the token is persisted into the client's
//! token store immediately, so the very next request is authenticated; the
//! session cache and navigation are updated by the caller.
//!
//! Logout is layered: [`ApiClient::logout`] is only the backend
//! notification, and [`ApiClient::end_session`] wraps it with the
//! unconditional local clear — token and cached queries are emptied
//! whatever the backend said. The token store is the UI's source of truth
//! for "am I logged in", and a failed notification must not leave the user
//! half logged out.

use serde::{Deserialize, Serialize};

use store::{QueryCache, UserIdentity};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Body for both `POST /api/v1/auth/register` and `.../login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful response from register and login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserIdentity,
}

impl ApiClient {
    /// Create an account. Persists the returned token on success.
    pub async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .post_json("/api/v1/auth/register", credentials)
            .await?;
        self.tokens().set(&response.access_token);
        Ok(response)
    }

    /// Authenticate an existing account. Persists the returned token on
    /// success.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post_json("/api/v1/auth/login", credentials).await?;
        self.tokens().set(&response.access_token);
        Ok(response)
    }

    /// Best-effort backend notification that the session is over.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/api/v1/auth/logout").await
    }

    /// End the session: notify the backend, then clear the stored token and
    /// the query cache unconditionally. A rejected or unreachable logout
    /// endpoint still leaves local state empty.
    pub async fn end_session(&self, cache: &QueryCache) {
        if let Err(err) = self.logout().await {
            tracing::warn!(error = %err, "logout notification failed, clearing local session anyway");
        }
        self.tokens().clear();
        cache.clear();
    }
}
