//! HTTP client for the verification API
use std::collections::BTreeMap;

use factcheck_core::{ValidatedClaim, VerificationContext, VerifyRequest, VerifyResponse};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::config::ClientConfig;
use crate::error::{extract_detail, ClientError};

const VERIFY_PATH: &str = "/api/verify";
const HEALTH_PATH: &str = "/health";
const ROOT_PATH: &str = "/";

/// Longest claim prefix written to logs
const LOG_PREVIEW_CHARS: usize = 100;

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

pub struct VerifyClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl VerifyClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("factcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a validated claim to `POST /api/verify`
    pub async fn verify(&self, claim: &ValidatedClaim) -> Result<VerifyResponse, ClientError> {
        self.verify_with_context(claim, &VerificationContext::new())
            .await
    }

    pub async fn verify_with_context(
        &self,
        claim: &ValidatedClaim,
        ctx: &VerificationContext,
    ) -> Result<VerifyResponse, ClientError> {
        let span = info_span!("verify", trace_id = %ctx.trace_id);
        async {
            info!(claim = %preview(claim.as_str()), "sending claim for verification");

            let url = self.config.endpoint(VERIFY_PATH);
            let request = self
                .http
                .post(&url)
                .header("x-request-id", &ctx.trace_id)
                .json(&VerifyRequest::from(claim));

            let result = self.execute::<VerifyResponse>(&url, request).await;
            match &result {
                Ok(response) => info!(
                    verdict = %response.verdict,
                    confidence = response.confidence_score,
                    elapsed_ms = ctx.elapsed_ms(),
                    "verification complete"
                ),
                Err(err) => warn!(
                    error = %err,
                    status = ?err.status(),
                    elapsed_ms = ctx.elapsed_ms(),
                    "verification failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.config.endpoint(HEALTH_PATH);
        let request = self.http.get(&url);
        self.execute(&url, request).await
    }

    /// `GET /`
    pub async fn service_info(&self) -> Result<ServiceInfo, ClientError> {
        let url = self.config.endpoint(ROOT_PATH);
        let request = self.http.get(&url);
        self.execute(&url, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        debug!(%status, url, "response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), extract_detail(&body)));
        }

        let body = response.text().await.map_err(|e| self.classify(url, e))?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.config.timeout)
        } else if err.is_connect() {
            ClientError::Unreachable {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= LOG_PREVIEW_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    format!("{}...", head)
}
