//! FactCheckit client: the one outbound call
//!
//! `POST /api/verify` carries the trimmed claim and returns a
//! [`VerifyResponse`](factcheck_core::VerifyResponse). Failures are reduced
//! to a single user-facing message; nothing is retried.

pub mod client;
pub mod config;
pub mod error;
pub mod flow;

pub use client::{HealthStatus, ServiceInfo, VerifyClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use flow::{complete_verification, run_verification};
