//! Network transport seam.
//!
//! A [`Transport`] performs exactly one JSON POST per call. It reports either a
//! completed HTTP response (any status) or a [`TransportError`] when no response
//! was obtained. Retry and status classification live above this layer, in
//! [`crate::provider`].

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// A fully received HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One outbound JSON POST.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `body` to `url` with a bearer token and a per-attempt timeout.
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}
