//! Verdict labels and their display styles
//!
//! The backend assigns one of four truthfulness labels. Each label maps to
//! exactly one display style; anything outside the fixed set falls back to
//! the neutral style without a headline, and keeps the label as received.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Truthfulness label assigned to a claim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verdict {
    True,
    False,
    Misleading,
    Unverified,
    /// Label outside the known set, verbatim
    Unknown(String),
}

/// Color family used when displaying a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Red,
    Yellow,
    Gray,
}

/// How a verdict is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictStyle {
    pub tone: Tone,
    pub icon: &'static str,
    /// Absent for labels the client does not recognise
    pub headline: Option<&'static str>,
}

const TRUE_STYLE: VerdictStyle = VerdictStyle {
    tone: Tone::Green,
    icon: "✓",
    headline: Some("This claim is true"),
};

const FALSE_STYLE: VerdictStyle = VerdictStyle {
    tone: Tone::Red,
    icon: "✗",
    headline: Some("This claim is false"),
};

const MISLEADING_STYLE: VerdictStyle = VerdictStyle {
    tone: Tone::Yellow,
    icon: "⚠",
    headline: Some("This claim is misleading"),
};

const UNVERIFIED_STYLE: VerdictStyle = VerdictStyle {
    tone: Tone::Gray,
    icon: "?",
    headline: Some("We couldn't verify this claim"),
};

impl Verdict {
    /// Parse a wire label; labels are case sensitive
    pub fn from_label(label: &str) -> Self {
        match label {
            "TRUE" => Verdict::True,
            "FALSE" => Verdict::False,
            "MISLEADING" => Verdict::Misleading,
            "UNVERIFIED" => Verdict::Unverified,
            other => Verdict::Unknown(other.to_string()),
        }
    }

    /// Wire label for this verdict
    pub fn label(&self) -> &str {
        match self {
            Verdict::True => "TRUE",
            Verdict::False => "FALSE",
            Verdict::Misleading => "MISLEADING",
            Verdict::Unverified => "UNVERIFIED",
            Verdict::Unknown(label) => label,
        }
    }

    /// Select the display style for this verdict
    pub fn style(&self) -> VerdictStyle {
        match self {
            Verdict::True => TRUE_STYLE,
            Verdict::False => FALSE_STYLE,
            Verdict::Misleading => MISLEADING_STYLE,
            Verdict::Unverified => UNVERIFIED_STYLE,
            Verdict::Unknown(_) => VerdictStyle {
                headline: None,
                ..UNVERIFIED_STYLE
            },
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Verdict::from_label(&label))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
