//! Data Model: VerifyRequest, VerifyResponse, EvidencePoint, Source
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::claim::ValidatedClaim;
use crate::verdict::Verdict;

/// Body of `POST /api/verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// Trimmed claim text
    pub claim: String,
}

impl From<&ValidatedClaim> for VerifyRequest {
    fn from(claim: &ValidatedClaim) -> Self {
        Self {
            claim: claim.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidencePoint {
    pub point: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

/// Verdict returned by the verification API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Claim as the user submitted it
    pub original_claim: String,
    /// Claim as the backend normalized it
    pub extracted_claim: String,
    pub verdict: Verdict,
    /// Fractional certainty, 0..1
    pub confidence_score: f64,
    pub real_news_summary: String,
    pub detailed_explanation: String,
    #[serde(default)]
    pub evidence_points: Vec<EvidencePoint>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_reasoning: Option<String>,
    /// Fields this client does not interpret, passed through unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl VerifyResponse {
    /// Confidence as a whole percentage (0.92 -> 92)
    pub fn confidence_percent(&self) -> u8 {
        if !self.confidence_score.is_finite() {
            return 0;
        }
        (self.confidence_score * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// The normalized claim, only when it differs from what was submitted
    pub fn analyzed_as(&self) -> Option<&str> {
        if self.extracted_claim != self.original_claim {
            Some(&self.extracted_claim)
        } else {
            None
        }
    }

    pub fn has_evidence(&self) -> bool {
        !self.evidence_points.is_empty()
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Reasoning trace, ignoring blank strings
    pub fn reasoning(&self) -> Option<&str> {
        self.agent_reasoning
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}
