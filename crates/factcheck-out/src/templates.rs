//! Template loading and management for FactCheckit output.
//!
//! Templates use the response-templates YAML format:
//! - Multiple named templates
//! - Handlebars syntax
//! - An optional example/output pair per template
//!
//! The set shipped in `grammars/result-templates.yaml` is compiled into the
//! crate. A user file only needs the templates it wants to change; the rest
//! come from the built-in set.

use serde::Deserialize;
use std::collections::HashMap;

/// Built-in templates, embedded at compile time
pub const BUILTIN_TEMPLATES: &str = include_str!("../../../grammars/result-templates.yaml");

/// Templates every renderer must be able to resolve
pub const REQUIRED_TEMPLATES: &[&str] = &[
    "verdict_badge",
    "result_card",
    "loader",
    "error_banner",
    "input_status",
    "claim_tips",
    "page_banner",
];

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
    #[serde(default)]
    pub output: Option<String>,
}

impl TemplatesFile {
    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file {}: {}", path, e))?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str::<TemplatesFile>(yaml)
            .map_err(|e| format!("Failed to parse templates YAML: {}", e))
    }

    /// The compiled-in template set
    pub fn builtin() -> Result<Self, String> {
        Self::from_yaml(BUILTIN_TEMPLATES)
    }

    /// Load a user file layered over the built-in set
    pub fn load_with_fallback(path: &str) -> Result<Self, String> {
        let overrides = Self::load(path)?;
        Ok(Self::builtin()?.overlay(overrides))
    }

    /// Replace templates in `self` with those defined in `other`
    pub fn overlay(mut self, other: TemplatesFile) -> Self {
        self.version = other.version;
        self.templates.extend(other.templates);
        self
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Names from [`REQUIRED_TEMPLATES`] this file does not define
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_TEMPLATES
            .iter()
            .copied()
            .filter(|name| !self.templates.contains_key(*name))
            .collect()
    }

    /// List all template names
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
