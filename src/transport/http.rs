use super::{Transport, TransportError, TransportResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::time::Duration;

/// [`Transport`] backed by a shared `reqwest` client.
///
/// The client pools connections, so one instance should be reused for every
/// attempt. Timeouts are applied per request, not on the client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .user_agent(concat!("ai-prompt-runner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::generic_provider(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client (proxies, custom TLS roots, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let resp = self
            .client
            .post(url)
            .bearer_auth(bearer_token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(body)
            .timeout(timeout)
            .send()
            .await?;

        let status = resp.status().as_u16();
        // A body cut off mid-read is still a transport failure.
        let body = resp.bytes().await?;

        Ok(TransportResponse { status, body })
    }
}
