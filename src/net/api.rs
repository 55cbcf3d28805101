//! Auth API transport.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the browser transport reports itself unavailable,
//! since form submission only happens after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Transports only fail below the HTTP status line. Any response that
//! arrives, 2xx or not, is handed back as an `ApiResponse` so the submit
//! flow decides how to surface it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Credentials;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

/// Raw HTTP response from the auth API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the body is empty or not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Failures that prevent any HTTP response from being read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("response body unreadable: {0}")]
    Body(String),
    #[error("not available on server")]
    Unavailable,
}

/// HTTP client capable of posting credentials to the auth API.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// POST `credentials` as JSON to `path` under the transport's base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response could be obtained.
    async fn post_json(&self, path: &str, credentials: &Credentials) -> Result<ApiResponse, TransportError>;
}

/// Join a base URL and an endpoint path, tolerating a trailing `/` on the base.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Browser transport backed by `gloo-net`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Transport pointed at the compiled-in auth API.
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AuthTransport for BrowserTransport {
    async fn post_json(&self, path: &str, credentials: &Credentials) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint_url(&self.base_url, path);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::Body(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, credentials);
            Err(TransportError::Unavailable)
        }
    }
}
