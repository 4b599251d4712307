use reqwest::Client;

use crate::{api::types::*, config};

/// Thin wrapper over the auth backend. Session state lives in an HTTP-only
/// cookie managed by the backend; the client never stores credentials or
/// tokens itself.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response).await)
        }
    }

    /// Probe the current session. Succeeds only when the backend still
    /// recognizes the caller's session cookie.
    pub async fn current_session(&self) -> Result<SessionUser, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}/auth/me", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response).await)
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}/auth/logout", base_url))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(parse_error_body(response).await)
        }
    }
}

async fn parse_error_body(response: reqwest::Response) -> ApiError {
    let status = response.status();
    response
        .json::<ApiError>()
        .await
        .unwrap_or_else(|_| ApiError::unknown(format!("HTTP {}", status)))
}
