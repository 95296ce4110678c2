//! FactCheckit Core: response contract, verdict styles, claim input and session state
//!
//! Everything the client knows about a verification lives here. The
//! backend owns the hard work; this crate only models what crosses the
//! wire and the `idle -> loading -> success | error` cycle around it.

pub mod claim;
pub mod context;
pub mod data_model;
pub mod error;
pub mod session;
pub mod verdict;

pub use claim::{ClaimError, ClaimInput, ValidatedClaim};
pub use context::VerificationContext;
pub use data_model::{EvidencePoint, Source, VerifyRequest, VerifyResponse};
pub use error::FactcheckError;
pub use session::{Phase, VerificationSession};
pub use verdict::{Tone, Verdict, VerdictStyle};

/// Client version reported in logs and `--version`
pub const FACTCHECK_VERSION: &str = env!("CARGO_PKG_VERSION");
