//! Claim input model
//!
//! Tracks the raw text the user is typing and decides whether it may be
//! sent. Lengths are counted in Unicode scalar values, so the counter the
//! user sees and the checks below always agree.

use thiserror::Error;

/// Shortest trimmed claim the client will send
pub const MIN_CLAIM_CHARS: usize = 10;
/// Longest trimmed claim the verification API accepts
pub const MAX_CLAIM_CHARS: usize = 1000;
/// Length at which the progress bar is full
pub const RECOMMENDED_MAX_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Please enter a claim to verify")]
    Empty,
    #[error("Please enter a longer claim (at least {} characters)", MIN_CLAIM_CHARS)]
    TooShort { chars: usize },
    #[error("Please shorten your claim (at most {} characters)", MAX_CLAIM_CHARS)]
    TooLong { chars: usize },
}

/// Text as typed, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimInput {
    text: String,
}

impl ClaimInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character counter shown next to the input
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Fill level of the length bar, 0..=100
    pub fn progress_percent(&self) -> u8 {
        let ratio = self.char_count() as f64 / RECOMMENDED_MAX_CHARS as f64;
        (ratio * 100.0).min(100.0) as u8
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.text.trim().is_empty()
    }

    /// Check the claim before any network call is made
    pub fn validate(&self) -> Result<ValidatedClaim, ClaimError> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(ClaimError::Empty);
        }

        let chars = trimmed.chars().count();
        if chars < MIN_CLAIM_CHARS {
            return Err(ClaimError::TooShort { chars });
        }
        if chars > MAX_CLAIM_CHARS {
            return Err(ClaimError::TooLong { chars });
        }

        Ok(ValidatedClaim(trimmed.to_string()))
    }
}

/// Trimmed claim that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedClaim(String);

impl ValidatedClaim {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert_eq!(ClaimInput::new("").validate(), Err(ClaimError::Empty));
        assert_eq!(ClaimInput::new("   \n\t ").validate(), Err(ClaimError::Empty));
    }

    #[test]
    fn test_short_claim_rejected() {
        let err = ClaimInput::new("too short").validate().unwrap_err();
        assert_eq!(err, ClaimError::TooShort { chars: 9 });
        assert_eq!(
            err.to_string(),
            "Please enter a longer claim (at least 10 characters)"
        );
    }

    #[test]
    fn test_boundary_is_ten_trimmed_chars() {
        assert!(ClaimInput::new("0123456789").validate().is_ok());
        assert!(matches!(
            ClaimInput::new("   012345678   ").validate(),
            Err(ClaimError::TooShort { chars: 9 })
        ));
    }

    #[test]
    fn test_validated_claim_is_trimmed() {
        let claim = ClaimInput::new("  Airline Y canceled 45 flights  \n")
            .validate()
            .unwrap();
        assert_eq!(claim.as_str(), "Airline Y canceled 45 flights");
    }

    #[test]
    fn test_long_claim_rejected() {
        let input = ClaimInput::new("a".repeat(MAX_CLAIM_CHARS + 1));
        assert!(matches!(input.validate(), Err(ClaimError::TooLong { .. })));
        assert!(ClaimInput::new("a".repeat(MAX_CLAIM_CHARS)).validate().is_ok());
    }

    #[test]
    fn test_counter_tracks_raw_length() {
        let mut input = ClaimInput::default();
        assert_eq!(input.char_count(), 0);
        input.set("  hi ");
        assert_eq!(input.char_count(), 5);
        input.set("भूकंप आया");
        assert_eq!(input.char_count(), "भूकंप आया".chars().count());
    }

    #[test]
    fn test_progress_caps_at_full() {
        assert_eq!(ClaimInput::new("").progress_percent(), 0);
        assert_eq!(ClaimInput::new("a".repeat(150)).progress_percent(), 50);
        assert_eq!(ClaimInput::new("a".repeat(900)).progress_percent(), 100);
    }

    #[test]
    fn test_submit_enabled_state() {
        assert!(!ClaimInput::new("").can_submit(false));
        assert!(!ClaimInput::new("   ").can_submit(false));
        assert!(ClaimInput::new("x").can_submit(false));
        assert!(!ClaimInput::new("a real claim here").can_submit(true));
    }
}
