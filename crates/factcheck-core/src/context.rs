//! Verification Context: correlation data for one request/response cycle
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct VerificationContext {
    pub trace_id: String,
    pub started_at: DateTime<Utc>,
}

impl VerificationContext {
    pub fn new() -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
        }
    }

    /// Milliseconds since the request started
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}

impl Default for VerificationContext {
    fn default() -> Self {
        Self::new()
    }
}
