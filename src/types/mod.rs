//! 类型模块：单次提示调用的输入与规范化输出。
//!
//! # Types Module
//!
//! Value types that flow through a single prompt invocation.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PromptRequest`] | Prompt text plus the provider name it is sent through |
//! | [`PromptResponse`] | Normalized answer with a UTC timestamp captured at construction |
//!
//! A [`PromptResponse`] leaves the library as a plain JSON payload:
//!
//! ```json
//! {
//!   "prompt": "Hello",
//!   "response": "Hi there",
//!   "metadata": { "provider": "http", "timestamp_utc": "2026-02-18T10:00:00.000000+00:00" }
//! }
//! ```

pub mod request;
pub mod response;

pub use request::PromptRequest;
pub use response::PromptResponse;
