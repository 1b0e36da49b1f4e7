//! 用例编排：调用提供方、规范化、校验。
//!
//! Prompt execution use case.

use crate::provider::Provider;
use crate::types::{PromptRequest, PromptResponse};
use crate::validation::validate_response_payload;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Runs prompts through a provider and returns the validated, normalized payload.
#[derive(Clone)]
pub struct PromptRunner {
    provider: Arc<dyn Provider>,
}

impl PromptRunner {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Execute `request` and return its JSON payload.
    ///
    /// Provider and validation errors are returned unchanged.
    pub async fn run(&self, request: &PromptRequest) -> Result<Value> {
        let answer = self.provider.generate(&request.prompt_text).await?;

        let response = PromptResponse::new(&request.prompt_text, answer, &request.provider);
        let payload = response.to_payload();
        validate_response_payload(&payload)?;

        debug!(
            provider = request.provider.as_str(),
            timestamp_utc = response.timestamp_utc.as_str(),
            "prompt run completed"
        );
        Ok(payload)
    }
}
