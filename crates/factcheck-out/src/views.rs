//! View models: the data each template receives
//!
//! Every view borrows from the core types; nothing here owns state.

use factcheck_core::{ClaimInput, EvidencePoint, Source, Tone, VerifyResponse};
use serde::Serialize;

use crate::renderer::TemplateRenderer;
use crate::RenderError;

/// Steps shown by the loader while the backend works
pub const LOADER_STEPS: &[&str] = &["🔍 Extracting claim", "✓ Cross-referencing", "📊 Analyzing"];

/// A rendered verdict, split so callers can color the header by tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub tone: Tone,
    pub badge: String,
    pub headline: Option<String>,
    pub body: String,
}

#[derive(Serialize)]
struct BadgeView<'a> {
    icon: &'static str,
    verdict: &'a str,
    confidence: f64,
}

#[derive(Serialize)]
struct ResultView<'a> {
    summary: &'a str,
    explanation: &'a str,
    evidence: &'a [EvidencePoint],
    sources: &'a [Source],
    reasoning: Option<&'a str>,
    original_claim: &'a str,
    analyzed_as: Option<&'a str>,
}

#[derive(Serialize)]
struct LoaderView<'a> {
    claim: Option<&'a str>,
    steps: &'a [&'a str],
}

#[derive(Serialize)]
struct InputStatusView {
    chars: usize,
    progress: u8,
    can_submit: bool,
}

#[derive(Serialize)]
struct BannerView<'a> {
    version: &'a str,
    api_url: &'a str,
}

#[derive(Serialize)]
struct MessageView<'a> {
    message: &'a str,
}

impl<'a> TemplateRenderer<'a> {
    /// Render the verdict card for a response
    pub fn render_result(&self, response: &VerifyResponse) -> Result<RenderedCard, RenderError> {
        let style = response.verdict.style();

        let badge = self
            .render(
                "verdict_badge",
                &BadgeView {
                    icon: style.icon,
                    verdict: response.verdict.label(),
                    confidence: f64::from(response.confidence_percent()) / 100.0,
                },
            )
            .map_err(RenderError::Render)?;

        let body = self
            .render(
                "result_card",
                &ResultView {
                    summary: &response.real_news_summary,
                    explanation: &response.detailed_explanation,
                    evidence: &response.evidence_points,
                    sources: &response.sources,
                    reasoning: response.reasoning(),
                    original_claim: &response.original_claim,
                    analyzed_as: response.analyzed_as(),
                },
            )
            .map_err(RenderError::Render)?;

        Ok(RenderedCard {
            tone: style.tone,
            badge,
            headline: style.headline.map(String::from),
            body,
        })
    }

    /// Render the in-flight indicator
    pub fn render_loader(&self, claim: Option<&str>) -> Result<String, RenderError> {
        self.render(
            "loader",
            &LoaderView {
                claim,
                steps: LOADER_STEPS,
            },
        )
        .map_err(RenderError::Render)
    }

    /// Render a failure message
    pub fn render_error(&self, message: &str) -> Result<String, RenderError> {
        self.render("error_banner", &MessageView { message })
            .map_err(RenderError::Render)
    }

    /// Render the character counter line for the current input
    pub fn render_input_status(&self, input: &ClaimInput, loading: bool) -> Result<String, RenderError> {
        self.render(
            "input_status",
            &InputStatusView {
                chars: input.char_count(),
                progress: input.progress_percent(),
                can_submit: input.can_submit(loading),
            },
        )
        .map_err(RenderError::Render)
    }

    pub fn render_tips(&self) -> Result<String, RenderError> {
        self.render("claim_tips", &serde_json::json!({}))
            .map_err(RenderError::Render)
    }

    pub fn render_banner(&self, version: &str, api_url: &str) -> Result<String, RenderError> {
        self.render("page_banner", &BannerView { version, api_url })
            .map_err(RenderError::Render)
    }
}
