//! JSON-over-HTTP provider with transport-level retry.

use super::Provider;
use crate::config::ProviderConfig;
use crate::transport::{HttpTransport, Transport, TransportResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Generic HTTP AI provider.
///
/// Only transport failures (no HTTP response obtained) are retried, immediately
/// and up to `max_retries` times. Any received response is final: error statuses
/// and malformed bodies fail on the first attempt.
#[derive(Debug, Clone)]
pub struct HttpProvider<T = HttpTransport> {
    config: ProviderConfig,
    transport: T,
}

impl HttpProvider<HttpTransport> {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }
}

impl<T: Transport> HttpProvider<T> {
    pub fn with_transport(config: ProviderConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.config.model(),
            "prompt": prompt,
        })
    }

    async fn send_with_retry(&self, body: &Value) -> Result<TransportResponse> {
        let max_retries = self.config.max_retries();
        let mut attempt: u32 = 0;

        loop {
            debug!(
                attempt,
                max_retries,
                endpoint = self.config.endpoint(),
                "sending provider request"
            );

            match self
                .transport
                .post_json(
                    self.config.endpoint(),
                    self.config.api_key(),
                    body,
                    self.config.timeout(),
                )
                .await
            {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries => {
                    warn!(
                        attempt,
                        max_retries,
                        error = %e,
                        "provider request failed, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => {
                    return Err(Error::generic_provider(format!(
                        "Provider request failed: {}",
                        e
                    )))
                }
            }
        }
    }
}

#[async_trait]
impl<T: Transport> Provider for HttpProvider<T> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let start = Instant::now();
        let body = self.request_body(prompt);
        let resp = self.send_with_retry(&body).await?;

        if let Some(err) = classify_status(resp.status) {
            info!(
                http_status = resp.status,
                error_kind = err.kind().name(),
                duration_ms = start.elapsed().as_millis() as u64,
                "provider returned an error status"
            );
            return Err(err);
        }

        let answer = extract_answer(&resp.body)?;
        debug!(
            http_status = resp.status,
            duration_ms = start.elapsed().as_millis() as u64,
            "provider request succeeded"
        );
        Ok(answer)
    }
}

/// Map an HTTP status to the error it represents, or `None` below 400.
///
/// Checked in order: 401, 403, 429, the 5xx range, then any other status >= 400.
pub fn classify_status(status: u16) -> Option<Error> {
    let err = match status {
        401 => Error::authentication("Provider authentication failed (HTTP 401)."),
        403 => Error::authorization("Provider authorization failed (HTTP 403)."),
        429 => Error::rate_limit("Provider rate limit exceeded (HTTP 429)."),
        500..=599 => Error::upstream_server(format!("Provider server error (HTTP {}).", status)),
        s if s >= 400 => Error::generic_provider(format!("Provider returned HTTP {}.", s)),
        _ => return None,
    };
    Some(err)
}

fn extract_answer(body: &[u8]) -> Result<String> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|_| Error::generic_provider("Provider returned invalid JSON."))?;

    match json.get("response") {
        Some(Value::String(answer)) => Ok(answer.clone()),
        _ => Err(Error::generic_provider(
            "Provider response must contain a string field 'response'.",
        )),
    }
}
