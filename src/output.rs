//! Output persistence for normalized payloads.
//!
//! Payloads are expected to have passed
//! [`validate_response_payload`](crate::validation::validate_response_payload);
//! absent fields render as empty text.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory of `path` when it is missing.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Write `payload` as two-space indented JSON with a trailing newline.
pub fn write_json(path: &Path, payload: &Value) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let mut content = serde_json::to_string_pretty(payload)?;
    content.push('\n');
    fs::write(path, content)
}

/// Render `payload` into the Markdown report layout.
pub fn render_markdown(payload: &Value) -> String {
    let text = |value: &Value| value.as_str().unwrap_or_default().to_string();
    let metadata = &payload["metadata"];

    format!(
        "# AI Prompt Response\n\n\
         ## Prompt\n\n{}\n\n\
         ## Response\n\n{}\n\n\
         ## Metadata\n\n\
         - Provider: {}\n\
         - Timestamp (UTC): {}\n",
        text(&payload["prompt"]),
        text(&payload["response"]),
        text(&metadata["provider"]),
        text(&metadata["timestamp_utc"]),
    )
}

/// Write the Markdown report for `payload`.
pub fn write_markdown(path: &Path, payload: &Value) -> io::Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, render_markdown(payload))
}
