//! Unified Error Model
use thiserror::Error;

use crate::claim::ClaimError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactcheckError {
    #[error("CLAIM/{0}")]
    Claim(#[from] ClaimError),

    #[error("SESSION/{0}")]
    Session(String),
}
