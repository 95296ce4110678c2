//! Client configuration
//!
//! Starts from defaults; the CLI maps its flags (and their
//! `FACTCHECK_API_URL` / `FACTCHECK_TIMEOUT_SECS` env fallbacks) onto the
//! builder methods.

use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the verification API, without trailing slash
    pub api_url: String,
    /// Fixed timeout for each outbound request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "API URL must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(ClientError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Absolute URL for an API path such as `/api/verify`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}
