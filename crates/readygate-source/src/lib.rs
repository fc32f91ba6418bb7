//! Metadata Source collaborator: materializes a [`BackendMetadata`] value
//! before the engine runs.
//!
//! Two paths in, one type out: `fetch` pulls metadata from an InsForge
//! deployment over HTTP, `parse` accepts pasted JSON. Both fail before the
//! engine is ever involved; the engine itself has no error channel.

#![forbid(unsafe_code)]

use readygate_types::BackendMetadata;
use thiserror::Error;

/// Path of the metadata endpoint relative to the deployment base URL.
pub const METADATA_PATH: &str = "/api/metadata";

#[derive(Debug, Error)]
pub enum SourceError {
    /// The base URL failed validation before any request was made.
    #[error("base url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    /// The request could not be completed (DNS, connect, TLS, timeout).
    #[error("metadata request failed")]
    Transport(#[from] reqwest::Error),

    /// The deployment answered with a non-success status.
    #[error("metadata endpoint returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The response or pasted text was not valid metadata JSON.
    #[error("invalid metadata JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch metadata from `{base_url}/api/metadata` with a bearer token.
///
/// Transport and authorization failures surface as [`SourceError`]; they are
/// recoverable and the caller may retry with corrected input.
pub fn fetch(base_url: &str, api_key: &str) -> Result<BackendMetadata, SourceError> {
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(SourceError::InvalidBaseUrl(base_url.to_string()));
    }

    let url = format!("{}{}", base_url.trim_end_matches('/'), METADATA_PATH);
    let response = reqwest::blocking::Client::new()
        .get(&url)
        .bearer_auth(api_key)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(SourceError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text()?;
    parse(&text)
}

/// Parse user-supplied metadata JSON.
///
/// Typed deserialization: element shapes are validated here, while the three
/// top-level categories stay lenient (anything but an array disables the
/// category without an error).
pub fn parse(json_text: &str) -> Result<BackendMetadata, SourceError> {
    Ok(serde_json::from_str(json_text)?)
}
