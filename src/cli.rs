//! Command line surface.
//!
//! Flags take priority over the `AI_API_ENDPOINT`, `AI_API_KEY` and
//! `AI_API_MODEL` environment variables; clap performs that fallback, so the rest
//! of the library never touches the environment.

use crate::config::ProviderSettings;
use crate::output::{write_json, write_markdown};
use crate::provider::{create_provider, Provider, HTTP_PROVIDER};
use crate::runner::PromptRunner;
use crate::types::PromptRequest;
use crate::{Error, Result};
use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Send a prompt to an AI API and save outputs.
#[derive(Debug, Clone, Parser)]
#[command(name = "ai-prompt-runner", version)]
pub struct Cli {
    /// Prompt text to send
    #[arg(long)]
    pub prompt: String,

    /// Provider name
    #[arg(long, default_value = HTTP_PROVIDER)]
    pub provider: String,

    /// Provider endpoint URL (http or https)
    #[arg(long, env = "AI_API_ENDPOINT")]
    pub api_endpoint: Option<String>,

    /// Bearer token sent to the provider
    #[arg(long, env = "AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model name forwarded in the request body [default: default]
    #[arg(long, env = "AI_API_MODEL")]
    pub api_model: Option<String>,

    /// Per-attempt timeout in seconds [default: 30]
    #[arg(long, allow_negative_numbers = true)]
    pub timeout_seconds: Option<i64>,

    /// Retries after transport failures [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub max_retries: Option<i64>,

    /// Where to write the JSON payload
    #[arg(long, default_value = "outputs/response.json")]
    pub out_json: PathBuf,

    /// Where to write the Markdown report
    #[arg(long, default_value = "outputs/response.md")]
    pub out_md: PathBuf,
}

impl Cli {
    /// Raw provider inputs, defaults and validation still pending.
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            endpoint: self.api_endpoint.clone(),
            api_key: self.api_key.clone(),
            model: self.api_model.clone(),
            timeout_seconds: self.timeout_seconds,
            max_retries: self.max_retries,
        }
    }

    /// The request to run; blank prompts are rejected.
    pub fn prompt_request(&self) -> Result<PromptRequest> {
        if self.prompt.trim().is_empty() {
            return Err(Error::validation("Prompt must not be empty."));
        }
        Ok(PromptRequest::new(self.prompt.clone(), self.provider.clone()))
    }
}

/// Result of a completed command.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub payload: Value,
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
}

impl RunOutcome {
    /// The provider's answer text.
    pub fn response_text(&self) -> &str {
        self.payload["response"].as_str().unwrap_or_default()
    }
}

/// Build the provider named on the command line, then run the command.
pub async fn run(cli: &Cli) -> anyhow::Result<RunOutcome> {
    // Validate the prompt before any provider setup.
    cli.prompt_request()?;
    let provider = create_provider(&cli.provider, &cli.provider_settings())?;
    run_with_provider(cli, provider).await
}

/// Run the command against an already built provider and persist both outputs.
pub async fn run_with_provider(
    cli: &Cli,
    provider: Arc<dyn Provider>,
) -> anyhow::Result<RunOutcome> {
    let request = cli.prompt_request()?;
    let payload = PromptRunner::new(provider).run(&request).await?;

    write_json(&cli.out_json, &payload)
        .with_context(|| format!("Failed to write {}", cli.out_json.display()))?;
    write_markdown(&cli.out_md, &payload)
        .with_context(|| format!("Failed to write {}", cli.out_md.display()))?;

    info!(
        json = %cli.out_json.display(),
        markdown = %cli.out_md.display(),
        "outputs written"
    );

    Ok(RunOutcome {
        payload,
        json_path: cli.out_json.clone(),
        markdown_path: cli.out_md.clone(),
    })
}
