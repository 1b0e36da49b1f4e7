//! Transport doubles

use ai_prompt_runner::transport::{Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// One scripted outcome: a received response or a transport failure message.
pub type Step = Result<TransportResponse, String>;

pub fn refused() -> Step {
    Err("connection refused".to_string())
}

pub fn answer(status: u16, body: &str) -> Step {
    Ok(TransportResponse::new(status, body.to_string()))
}

/// Replays scripted outcomes in order and records every call.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every call at the transport level.
    pub fn always_refused() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(
        &self,
        _url: &str,
        _bearer_token: &str,
        _body: &serde_json::Value,
        _timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(msg)) => Err(TransportError::Other(msg)),
            None => Err(TransportError::Other("connection refused".to_string())),
        }
    }
}

/// Counts calls made through a real transport.
pub struct CountingTransport<T> {
    inner: T,
    calls: AtomicUsize,
}

impl<T> CountingTransport<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: Transport> Transport for CountingTransport<T> {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.post_json(url, bearer_token, body, timeout).await
    }
}
