//! Unified SDK error types and the in-band error payload.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Top-level SDK error.
///
/// Reserved for transport-level failures and local misuse. Contract-level
/// failures — missing required inputs, non-200 responses — never produce an
/// `Err`; the server's convention is an error-shaped JSON payload
/// ([`ErrorPayload`]) returned in `Ok`, and callers branch on payload shape.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Timeout")]
    Timeout,
}

/// The `{"error": "..."}` payload the loklak server convention uses in place
/// of a successful result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Render as the raw JSON value handed back to callers.
    pub fn into_value(self) -> Value {
        json!({ "error": self.error })
    }
}
