//! Client errors and their user-facing messages
use std::time::Duration;

use thiserror::Error;

pub const TIMEOUT_MESSAGE: &str =
    "The verification is taking longer than expected. Please try again.";
pub const SERVER_ERROR_MESSAGE: &str =
    "The verification server encountered an error. Please try again later.";
pub const VALIDATION_MESSAGE: &str =
    "The claim could not be processed. Please rephrase it and try again.";
pub const UNREACHABLE_MESSAGE: &str =
    "Cannot connect to the verification server. Please check that it is running.";
pub const FALLBACK_MESSAGE: &str = "Failed to verify claim. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("cannot reach {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("server error {status}")]
    Server { status: u16, detail: Option<String> },

    #[error("claim rejected by the API (422)")]
    Validation { detail: Option<String> },

    #[error("unexpected status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Build the error for a non-success HTTP status
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            422 => ClientError::Validation { detail },
            500..=599 => ClientError::Server { status, detail },
            _ => ClientError::Status { status, detail },
        }
    }

    /// Message shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Timeout(_) => TIMEOUT_MESSAGE.to_string(),
            ClientError::Unreachable { .. } => UNREACHABLE_MESSAGE.to_string(),
            ClientError::Server { .. } => SERVER_ERROR_MESSAGE.to_string(),
            ClientError::Validation { .. } => VALIDATION_MESSAGE.to_string(),
            ClientError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Config(reason) => reason.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } | ClientError::Status { status, .. } => {
                Some(*status)
            }
            ClientError::Validation { .. } => Some(422),
            _ => None,
        }
    }
}

/// Pull a string `detail` out of an error body such as `{"detail": "..."}`
///
/// Structured details (lists of field errors) are ignored.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
}
