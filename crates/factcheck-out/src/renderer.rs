//! Template rendering for FactCheckit output.
//!
//! Uses Handlebars with HTML escaping disabled (output goes to a terminal)
//! and these helpers:
//! - percent: Format a fraction as a percentage
//! - truncate: Shorten text to a number of characters
//! - inc: 1-based numbering from `@index`
//! - join: Join an array with a separator
//! - or_default: Fallback for null values
//! - bar: Fixed-width fill bar from a percentage

use handlebars::{handlebars_helper, no_escape, Handlebars, JsonValue};
use serde::Serialize;

use crate::templates::TemplatesFile;

/// Compiled renderer with registered helpers
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
    templates: TemplatesFile,
}

handlebars_helper!(percent: |value: f64| format!("{}%", (value * 100.0).round() as i64));

handlebars_helper!(truncate: |text: str, max: u64| truncate_chars(text, max as usize));

handlebars_helper!(inc: |index: u64| index + 1);

handlebars_helper!(join: |items: array, separator: str| {
    items
        .iter()
        .map(|v| match v {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(separator)
});

handlebars_helper!(or_default: |value: Json, fallback: str| {
    match value {
        JsonValue::Null => fallback.to_string(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
});

handlebars_helper!(bar: |pct: u64, width: u64| fill_bar(pct, width as usize));

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer from a templates file
    pub fn new(templates: TemplatesFile) -> Result<Self, String> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("percent", Box::new(percent));
        handlebars.register_helper("truncate", Box::new(truncate));
        handlebars.register_helper("inc", Box::new(inc));
        handlebars.register_helper("join", Box::new(join));
        handlebars.register_helper("or_default", Box::new(or_default));
        handlebars.register_helper("bar", Box::new(bar));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| format!("Template {} is invalid: {}", name, e))?;
        }

        Ok(TemplateRenderer {
            handlebars,
            templates,
        })
    }

    /// Renderer over the compiled-in templates
    pub fn builtin() -> Result<Self, String> {
        Self::new(TemplatesFile::builtin()?)
    }

    /// Renderer over a user file layered on the built-in templates
    pub fn load(path: &str) -> Result<Self, String> {
        Self::new(TemplatesFile::load_with_fallback(path)?)
    }

    /// Render a named template with data
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, String> {
        self.handlebars
            .render(template_name, data)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| format!("Render error: {}", e))
    }

    /// List available template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{}...", head.trim_end())
}

fn fill_bar(pct: u64, width: usize) -> String {
    let filled = (pct.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
