//! Provider configuration
//!
//! [`ProviderSettings`] carries raw, possibly missing inputs as the command line
//! supplies them. [`ProviderSettings::resolve`] applies defaults and validation and
//! yields an immutable [`ProviderConfig`], which is all the provider ever sees.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Model name used when none is supplied.
pub const DEFAULT_MODEL: &str = "default";

/// Per-attempt timeout used when none is supplied.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Retry budget used when none is supplied.
pub const DEFAULT_MAX_RETRIES: u32 = 0;

/// Resolved, validated configuration for the HTTP provider.
///
/// Invariants: `endpoint` and `api_key` are non-empty, `timeout_seconds > 0`.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    endpoint: String,
    api_key: String,
    model: String,
    timeout_seconds: u64,
    max_retries: u32,
}

impl ProviderConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout_seconds: u64,
        max_retries: u32,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let api_key = api_key.into();

        if endpoint.trim().is_empty() {
            return Err(Error::configuration("AI_API_ENDPOINT is required."));
        }
        if api_key.trim().is_empty() {
            return Err(Error::configuration("AI_API_KEY is required."));
        }
        if timeout_seconds == 0 {
            return Err(Error::configuration(
                "timeout_seconds must be greater than 0.",
            ));
        }

        Ok(Self {
            endpoint,
            api_key,
            model: model.into(),
            timeout_seconds,
            max_retries,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    /// Per-attempt timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Total number of attempts the retry loop may make.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// Unresolved provider inputs.
///
/// Numeric fields are signed so out-of-range values coming from the command line
/// surface as configuration errors instead of parse failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
}

impl ProviderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: i64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn with_max_retries(mut self, max_retries: i64) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Apply defaults and validate, producing an immutable [`ProviderConfig`].
    ///
    /// Checks run in a fixed order: timeout, retries, endpoint presence, key
    /// presence, endpoint scheme.
    pub fn resolve(&self) -> Result<ProviderConfig> {
        let endpoint = trimmed(self.endpoint.as_deref());
        let api_key = trimmed(self.api_key.as_deref());
        let model = match trimmed(self.model.as_deref()) {
            "" => DEFAULT_MODEL,
            m => m,
        };

        let timeout_seconds = self
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS as i64);
        if timeout_seconds <= 0 {
            return Err(Error::configuration(
                "timeout_seconds must be greater than 0.",
            ));
        }

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES as i64);
        if max_retries < 0 {
            return Err(Error::configuration(
                "max_retries must be greater than or equal to 0.",
            ));
        }
        let max_retries = u32::try_from(max_retries).map_err(|_| {
            Error::configuration(format!("max_retries must be at most {}.", u32::MAX))
        })?;

        if endpoint.is_empty() {
            return Err(Error::configuration("AI_API_ENDPOINT is required."));
        }
        if api_key.is_empty() {
            return Err(Error::configuration("AI_API_KEY is required."));
        }
        validate_endpoint_scheme(endpoint)?;

        ProviderConfig::new(
            endpoint,
            api_key,
            model,
            timeout_seconds as u64,
            max_retries,
        )
    }
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or("")
}

fn validate_endpoint_scheme(endpoint: &str) -> Result<()> {
    let parsed = url::Url::parse(endpoint)
        .map_err(|_| Error::configuration("AI_API_ENDPOINT must be an http(s) URL."))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(Error::configuration(
            "AI_API_ENDPOINT must be an http(s) URL.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn base() -> ProviderSettings {
        ProviderSettings::new()
            .with_endpoint("http://localhost:11434/api/generate")
            .with_api_key("dummy")
            .with_model("llama3.2")
    }

    #[test]
    fn test_resolve_keeps_explicit_values() {
        let config = base()
            .with_timeout_seconds(12)
            .with_max_retries(3)
            .resolve()
            .unwrap();

        assert_eq!(config.endpoint(), "http://localhost:11434/api/generate");
        assert_eq!(config.api_key(), "dummy");
        assert_eq!(config.model(), "llama3.2");
        assert_eq!(config.timeout_seconds(), 12);
        assert_eq!(config.timeout(), Duration::from_secs(12));
        assert_eq!(config.max_retries(), 3);
        assert_eq!(config.max_attempts(), 4);
    }

    #[test]
    fn test_resolve_applies_defaults() {
        let config = ProviderSettings::new()
            .with_endpoint("  https://api.example.test/v1/generate  ")
            .with_api_key(" key ")
            .with_model("   ")
            .resolve()
            .unwrap();

        assert_eq!(config.endpoint(), "https://api.example.test/v1/generate");
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.max_retries(), DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_resolve_rejects_invalid_timeout() {
        for bad in [0, -5] {
            let err = base().with_timeout_seconds(bad).resolve().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
            assert_eq!(err.message(), "timeout_seconds must be greater than 0.");
        }
    }

    #[test]
    fn test_resolve_rejects_negative_retries() {
        let err = base().with_max_retries(-1).resolve().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.message(),
            "max_retries must be greater than or equal to 0."
        );
    }

    #[test]
    fn test_resolve_requires_endpoint() {
        let err = ProviderSettings::new()
            .with_endpoint("")
            .with_api_key("dummy")
            .resolve()
            .unwrap_err();
        assert_eq!(err.message(), "AI_API_ENDPOINT is required.");
    }

    #[test]
    fn test_resolve_requires_api_key() {
        let err = ProviderSettings::new()
            .with_endpoint("http://localhost:11434/api/generate")
            .resolve()
            .unwrap_err();
        assert_eq!(err.message(), "AI_API_KEY is required.");
    }

    #[test]
    fn test_resolve_rejects_non_http_scheme() {
        for endpoint in ["ftp://example.test/api", "not a url", "file:///tmp/x"] {
            let err = base().with_endpoint(endpoint).resolve().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
            assert_eq!(err.message(), "AI_API_ENDPOINT must be an http(s) URL.");
        }
    }

    #[test]
    fn test_config_new_enforces_invariants() {
        assert!(ProviderConfig::new("http://x.test", "k", "m", 0, 0).is_err());
        assert!(ProviderConfig::new("", "k", "m", 1, 0).is_err());
        assert!(ProviderConfig::new("http://x.test", " ", "m", 1, 0).is_err());
        assert!(ProviderConfig::new("http://x.test", "k", "m", 1, 0).is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = base().resolve().unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("dummy"));
        assert!(rendered.contains("<redacted>"));
    }
}
