use serde::{Deserialize, Serialize};

/// Input for one prompt execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt_text: String,
    pub provider: String,
}

impl PromptRequest {
    pub fn new(prompt_text: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            provider: provider.into(),
        }
    }
}
