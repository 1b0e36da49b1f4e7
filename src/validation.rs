//! Payload shape validation.
//!
//! Re-checks the normalized payload before it leaves the library. Checks run in
//! a fixed order and the first failure is returned:
//! missing top-level keys, `prompt` type, `response` type, `metadata` type,
//! missing metadata keys, `metadata.provider` type, `metadata.timestamp_utc` type.

use crate::{Error, Result};
use serde_json::{Map, Value};

const REQUIRED_TOP_KEYS: &[&str] = &["metadata", "prompt", "response"];
const REQUIRED_META_KEYS: &[&str] = &["provider", "timestamp_utc"];

/// Validate the normalized response payload.
pub fn validate_response_payload(payload: &Value) -> Result<()> {
    let top = payload
        .as_object()
        .ok_or_else(|| Error::validation("Payload must be an object."))?;

    let missing = missing_keys(top, REQUIRED_TOP_KEYS);
    if !missing.is_empty() {
        return Err(Error::validation(format!(
            "Missing top-level keys: {:?}",
            missing
        )));
    }

    if !top["prompt"].is_string() {
        return Err(Error::validation("'prompt' must be a string."));
    }
    if !top["response"].is_string() {
        return Err(Error::validation("'response' must be a string."));
    }
    let metadata = top["metadata"]
        .as_object()
        .ok_or_else(|| Error::validation("'metadata' must be an object."))?;

    let missing = missing_keys(metadata, REQUIRED_META_KEYS);
    if !missing.is_empty() {
        return Err(Error::validation(format!(
            "Missing metadata keys: {:?}",
            missing
        )));
    }

    if !metadata["provider"].is_string() {
        return Err(Error::validation("'metadata.provider' must be a string."));
    }
    if !metadata["timestamp_utc"].is_string() {
        return Err(Error::validation(
            "'metadata.timestamp_utc' must be a string.",
        ));
    }

    Ok(())
}

/// Required keys absent from `object`, in sorted order.
fn missing_keys<'a>(object: &Map<String, Value>, required: &[&'a str]) -> Vec<&'a str> {
    let mut missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();
    missing.sort_unstable();
    missing
}
