//! ai-prompt-runner: send one prompt to an HTTP AI API and save the answer.
//!
//! Usage:
//!   ai-prompt-runner --prompt <TEXT> [--provider http] [--api-endpoint <URL>]
//!                    [--api-key <KEY>] [--api-model <NAME>]
//!                    [--timeout-seconds <N>] [--max-retries <N>]
//!                    [--out-json <PATH>] [--out-md <PATH>]
//!
//! Logs go to stderr and are filtered through `RUST_LOG` (default `warn`).

use ai_prompt_runner::cli::{self, Cli};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli::run(&args).await {
        Ok(outcome) => {
            println!("{}", outcome.response_text());
            tracing::info!(
                json = %outcome.json_path.display(),
                markdown = %outcome.markdown_path.display(),
                "prompt completed"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
