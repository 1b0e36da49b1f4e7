//! # ai-prompt-runner
//!
//! 向可配置的 HTTP AI 接口发送单条提示，返回经过规范化与校验的响应。
//!
//! Send a single text prompt to a configurable HTTP AI API and get back a
//! normalized, validated payload, optionally persisted as JSON and Markdown.
//!
//! ## Overview
//!
//! ```text
//! PromptRunner::run(request)
//!   -> Provider::generate(prompt)      retry loop over transport failures
//!   -> PromptResponse::new(..)         UTC timestamp captured here
//!   -> validate_response_payload(..)   shape re-checked before returning
//!   -> serde_json::Value payload
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ai_prompt_runner::config::ProviderSettings;
//! use ai_prompt_runner::provider::create_provider;
//! use ai_prompt_runner::{PromptRequest, PromptRunner};
//!
//! #[tokio::main]
//! async fn main() -> ai_prompt_runner::Result<()> {
//!     let settings = ProviderSettings::new()
//!         .with_endpoint("http://localhost:11434/api/generate")
//!         .with_api_key("your-api-key")
//!         .with_max_retries(2);
//!
//!     let provider = create_provider("http", &settings)?;
//!     let payload = PromptRunner::new(provider)
//!         .run(&PromptRequest::new("Hello", "http"))
//!         .await?;
//!
//!     println!("{}", payload["response"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Provider settings, defaults and validation |
//! | [`provider`] | Provider capability and the HTTP implementation |
//! | [`transport`] | Single-attempt JSON POST seam |
//! | [`types`] | Request and normalized response types |
//! | [`validation`] | Payload shape validation |
//! | [`runner`] | Prompt execution use case |
//! | [`output`] | JSON and Markdown persistence |
//! | [`cli`] | Command line surface |

pub mod cli;
pub mod config;
pub mod output;
pub mod provider;
pub mod runner;
pub mod transport;
pub mod types;
pub mod validation;

pub use config::{ProviderConfig, ProviderSettings};
pub use provider::{HttpProvider, Provider};
pub use runner::PromptRunner;
pub use types::{PromptRequest, PromptResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorKind};
