//! 提供方模块：把提示文本转换为模型回答，失败时返回分类错误。
//!
//! # Provider Module
//!
//! [`Provider`] is the single capability the runner depends on. [`HttpProvider`]
//! is the JSON-over-HTTP implementation; [`create_provider`] selects and builds a
//! provider by name from unresolved [`crate::config::ProviderSettings`].
//!
//! ## HTTP contract
//!
//! | direction | shape |
//! |-----------|-------|
//! | request   | `POST <endpoint>` with `{"model": "...", "prompt": "..."}` |
//! | response  | `{"response": "..."}`, extra fields ignored |
//!
//! ## Status classification
//!
//! | status | error |
//! |--------|-------|
//! | 401 | [`ErrorKind::Authentication`](crate::ErrorKind::Authentication) |
//! | 403 | [`ErrorKind::Authorization`](crate::ErrorKind::Authorization) |
//! | 429 | [`ErrorKind::RateLimit`](crate::ErrorKind::RateLimit) |
//! | 500..=599 | [`ErrorKind::UpstreamServer`](crate::ErrorKind::UpstreamServer) |
//! | other >= 400 | [`ErrorKind::GenericProvider`](crate::ErrorKind::GenericProvider) |

mod factory;
mod http;

pub use factory::{create_provider, HTTP_PROVIDER};
pub use http::{classify_status, HttpProvider};

use crate::Result;
use async_trait::async_trait;

/// Turns a prompt into provider text.
///
/// Implementations hold no per-call mutable state, so one instance can serve
/// concurrent calls.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
