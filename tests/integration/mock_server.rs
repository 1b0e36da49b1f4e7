//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

pub const GENERATE_PATH: &str = "/api/generate";

/// Test fixture that manages a mock provider endpoint
pub struct MockServerFixture {
    pub server: ServerGuard,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    /// Full endpoint URL to put into a `ProviderConfig`
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.url(), GENERATE_PATH)
    }

    /// Mock any POST to the endpoint with a fixed status and body
    pub async fn mock_response(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", GENERATE_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a successful answer, only matching the expected wire request
    pub async fn mock_answer(&mut self, prompt: &str, model: &str, answer: &str) -> Mock {
        self.server
            .mock("POST", GENERATE_PATH)
            .match_header("authorization", "Bearer dummy")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"model": model, "prompt": prompt})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"response": answer}).to_string())
            .create_async()
            .await
    }
}
