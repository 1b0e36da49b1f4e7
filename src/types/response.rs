//! Normalized provider answer.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Normalized output of a provider call.
///
/// The timestamp is taken from the wall clock (UTC) once, when the value is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub response: String,
    pub provider: String,
    pub timestamp_utc: String,
}

impl PromptResponse {
    pub fn new(
        prompt: impl Into<String>,
        response: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self::at(prompt, response, provider, Utc::now())
    }

    /// Build a response stamped with an explicit instant.
    pub fn at(
        prompt: impl Into<String>,
        response: impl Into<String>,
        provider: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            provider: provider.into(),
            timestamp_utc: timestamp.to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }

    /// Convert into the JSON payload handed to output collaborators.
    pub fn to_payload(&self) -> Value {
        json!({
            "prompt": self.prompt,
            "response": self.response,
            "metadata": {
                "provider": self.provider,
                "timestamp_utc": self.timestamp_utc,
            },
        })
    }
}
