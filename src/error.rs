//! Error types for the audit pipeline
//!
//! The check catalog itself never fails: a missing element is a scored
//! outcome, not an error. Everything here is a scan- or report-level failure.

use crate::report::ReportId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to fetch or analyze website {url}: {reason}")]
    FetchFailure { url: String, reason: String },

    #[error("Unknown report: {0}")]
    UnknownReport(ReportId),

    #[error("Payment rejected: {0}")]
    PaymentRejected(String),

    #[error("Failed to render report: {0}")]
    Render(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AuditError {
    pub fn fetch(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        AuditError::FetchFailure {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(e: serde_json::Error) -> Self {
        AuditError::Render(e.to_string())
    }
}

pub type AuditResult<T> = Result<T, AuditError>;
