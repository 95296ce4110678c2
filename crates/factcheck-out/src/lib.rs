//! FactCheckit-OUT: verdicts and views rendered as terminal text
//!
//! This crate turns a [`VerifyResponse`] and the other client states
//! (loading, error, input counter) into human-readable text using
//! Handlebars templates from `grammars/result-templates.yaml`.
//!
//! # Example
//!
//! ```ignore
//! use factcheck_out::quick;
//!
//! let card = quick::result(&response)?;
//! println!("{}\n{}", card.badge, card.body);
//! ```

pub mod renderer;
pub mod templates;
pub mod views;

use once_cell::sync::Lazy;
use thiserror::Error;

pub use renderer::TemplateRenderer;
pub use templates::TemplatesFile;
pub use views::{RenderedCard, LOADER_STEPS};

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
}

static BUILTIN: Lazy<Result<TemplateRenderer<'static>, String>> = Lazy::new(TemplateRenderer::builtin);

/// Shared renderer over the compiled-in templates
pub fn builtin_renderer() -> Result<&'static TemplateRenderer<'static>, RenderError> {
    BUILTIN
        .as_ref()
        .map_err(|e| RenderError::Template(e.clone()))
}

/// Renderer for an optional user templates file
pub fn load_renderer(path: &str) -> Result<TemplateRenderer<'static>, RenderError> {
    TemplateRenderer::load(path).map_err(RenderError::Template)
}

/// Quick render helpers over the built-in templates
pub mod quick {
    use super::*;
    use factcheck_core::VerifyResponse;

    /// Render a verdict card
    pub fn result(response: &VerifyResponse) -> Result<RenderedCard, RenderError> {
        builtin_renderer()?.render_result(response)
    }

    /// Render a failure message, falling back to plain text
    pub fn error(message: &str) -> String {
        builtin_renderer()
            .and_then(|r| r.render_error(message))
            .unwrap_or_else(|_| format!("Error: {}", message))
    }

    /// Render the loader text
    pub fn loader(claim: Option<&str>) -> String {
        builtin_renderer()
            .and_then(|r| r.render_loader(claim))
            .unwrap_or_else(|_| "Verifying your claim...".to_string())
    }
}
