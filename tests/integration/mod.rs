//! Shared fixtures for integration tests

#![allow(dead_code)]

pub mod mock_server;
pub mod transports;

use ai_prompt_runner::ProviderConfig;

/// Provider config pointing at `endpoint` with a short timeout.
pub fn config(endpoint: &str, max_retries: u32) -> ProviderConfig {
    ProviderConfig::new(endpoint, "dummy", "m1", 5, max_retries).expect("valid test config")
}

/// URL of a local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/generate", port)
}
