//! Verification session: `idle -> loading -> success | error`
//!
//! One session covers one user's interaction with the form. At most one
//! request is in flight; while it is, the input is frozen and neither a
//! second submit nor a reset is accepted.

use tracing::debug;

use crate::claim::{ClaimInput, ValidatedClaim};
use crate::data_model::VerifyResponse;
use crate::error::FactcheckError;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Loading { claim: ValidatedClaim },
    Succeeded(Box<VerifyResponse>),
    Failed { message: String },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading { .. } => "loading",
            Phase::Succeeded(_) => "success",
            Phase::Failed { .. } => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerificationSession {
    input: ClaimInput,
    phase: Phase,
}

impl VerificationSession {
    pub fn new() -> Self {
        Self {
            input: ClaimInput::default(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn input(&self) -> &ClaimInput {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn can_submit(&self) -> bool {
        self.input.can_submit(self.is_loading())
    }

    pub fn result(&self) -> Option<&VerifyResponse> {
        match &self.phase {
            Phase::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Replace the input text
    pub fn set_input(&mut self, text: impl Into<String>) -> Result<(), FactcheckError> {
        self.ensure_not_loading("input is disabled while verifying")?;
        self.input.set(text);
        Ok(())
    }

    /// Validate the input and, if it passes, enter `Loading`
    ///
    /// Returns the claim to send. A validation failure moves the session to
    /// `Failed` and nothing is sent.
    pub fn submit(&mut self) -> Result<ValidatedClaim, FactcheckError> {
        self.ensure_not_loading("a verification is already in flight")?;

        match self.input.validate() {
            Ok(claim) => {
                debug!(chars = claim.as_str().chars().count(), "claim accepted");
                self.phase = Phase::Loading {
                    claim: claim.clone(),
                };
                Ok(claim)
            }
            Err(err) => {
                debug!(error = %err, "claim rejected before sending");
                self.phase = Phase::Failed {
                    message: err.to_string(),
                };
                Err(FactcheckError::Claim(err))
            }
        }
    }

    /// Complete the in-flight request with a verdict
    pub fn succeed(&mut self, response: VerifyResponse) -> Result<(), FactcheckError> {
        self.ensure_loading("succeed")?;
        self.phase = Phase::Succeeded(Box::new(response));
        Ok(())
    }

    /// Complete the in-flight request with a user-facing error message
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), FactcheckError> {
        self.ensure_loading("fail")?;
        self.phase = Phase::Failed {
            message: message.into(),
        };
        Ok(())
    }

    /// Clear the input, result and error
    pub fn reset(&mut self) -> Result<(), FactcheckError> {
        self.ensure_not_loading("cannot reset while verifying")?;
        self.input.clear();
        self.phase = Phase::Idle;
        Ok(())
    }

    fn ensure_not_loading(&self, reason: &str) -> Result<(), FactcheckError> {
        if self.is_loading() {
            return Err(FactcheckError::Session(reason.to_string()));
        }
        Ok(())
    }

    fn ensure_loading(&self, transition: &str) -> Result<(), FactcheckError> {
        if !self.is_loading() {
            return Err(FactcheckError::Session(format!(
                "cannot {} from {}",
                transition,
                self.phase.name()
            )));
        }
        Ok(())
    }
}

impl Default for VerificationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimError;
    use crate::verdict::Verdict;

    fn response() -> VerifyResponse {
        VerifyResponse {
            original_claim: "City X recorded a 7.2 magnitude earthquake".to_string(),
            extracted_claim: "City X recorded a 7.2 magnitude earthquake".to_string(),
            verdict: Verdict::True,
            confidence_score: 0.8,
            real_news_summary: "Confirmed by the seismology agency.".to_string(),
            detailed_explanation: "Multiple outlets report the quake.".to_string(),
            evidence_points: vec![],
            sources: vec![],
            agent_reasoning: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_happy_path() {
        let mut session = VerificationSession::new();
        assert_eq!(session.phase(), &Phase::Idle);
        assert!(!session.can_submit());

        session
            .set_input("City X recorded a 7.2 magnitude earthquake")
            .unwrap();
        assert!(session.can_submit());

        let claim = session.submit().unwrap();
        assert_eq!(claim.as_str(), "City X recorded a 7.2 magnitude earthquake");
        assert!(session.is_loading());
        assert!(!session.can_submit());

        session.succeed(response()).unwrap();
        assert_eq!(session.phase().name(), "success");
        assert_eq!(session.result().unwrap().verdict, Verdict::True);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_short_input_never_reaches_loading() {
        let mut session = VerificationSession::new();
        session.set_input("short").unwrap();

        let err = session.submit().unwrap_err();
        assert!(matches!(
            err,
            FactcheckError::Claim(ClaimError::TooShort { chars: 5 })
        ));
        assert!(!session.is_loading());
        assert_eq!(
            session.error(),
            Some("Please enter a longer claim (at least 10 characters)")
        );
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut session = VerificationSession::new();
        session.set_input("The government announced a shutdown").unwrap();
        session.submit().unwrap();

        assert!(session.submit().is_err());
        assert!(session.set_input("something else entirely").is_err());
        assert!(session.reset().is_err());
        assert!(session.is_loading());
    }

    #[test]
    fn test_completion_requires_loading() {
        let mut session = VerificationSession::new();
        assert!(session.succeed(response()).is_err());
        assert!(session.fail("boom").is_err());
        assert_eq!(session.phase(), &Phase::Idle);
    }

    #[test]
    fn test_failure_then_reset() {
        let mut session = VerificationSession::new();
        session.set_input("Airline Y canceled 45 flights").unwrap();
        session.submit().unwrap();
        session.fail("Cannot connect to the verification server.").unwrap();
        assert_eq!(session.phase().name(), "error");

        session.reset().unwrap();
        assert_eq!(session.phase(), &Phase::Idle);
        assert!(session.input().is_empty());
    }

    #[test]
    fn test_resubmit_after_result() {
        let mut session = VerificationSession::new();
        session.set_input("Airline Y canceled 45 flights").unwrap();
        session.submit().unwrap();
        session.succeed(response()).unwrap();

        session.submit().unwrap();
        assert!(session.is_loading());
        assert!(session.result().is_none());
    }
}
