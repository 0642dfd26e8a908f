//! # The configured HTTP client
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the backend base URL and the
//! token store. Every request goes through the helpers here, which attach
//! the bearer header when a token is stored and map non-success responses
//! through [`ApiError::from_response`].
//!
//! The client is cheap to clone (reqwest clients share their connection
//! pool) and is handed to the UI through context, one instance per app.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use store::TokenStore;

use crate::error::ApiError;

/// Shared handle to the token store the client authenticates with.
pub type SharedTokenStore = Arc<dyn TokenStore + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    tokens: SharedTokenStore,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`, authenticating with
    /// tokens from `tokens`.
    pub fn new(base_url: impl Into<String>, tokens: SharedTokenStore) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            tokens,
        }
    }

    /// The token store this client reads from and that login persists into.
    pub fn tokens(&self) -> &SharedTokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.authorize(self.http.post(self.url(path))).send().await?;
        Self::expect_success(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(status.as_u16(), response).await)
        }
    }

    async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(status.as_u16(), response).await)
        }
    }

    async fn error_from(status: u16, response: reqwest::Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status, &body);
        tracing::warn!(status, error = %err, "backend request failed");
        err
    }
}
