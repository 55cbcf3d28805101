//! `reqwest` implementation of the auth API transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use authform::net::api::{ApiResponse, AuthTransport, TransportError, endpoint_url};
use authform::net::types::Credentials;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AuthTransport for ReqwestTransport {
    async fn post_json(&self, path: &str, credentials: &Credentials) -> Result<ApiResponse, TransportError> {
        let url = endpoint_url(&self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        tracing::debug!(%url, status, "auth API responded");
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
