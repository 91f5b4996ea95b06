//! Adjudication domain errors
//!
//! The engine itself has no error channel; data-quality problems become
//! decision outcomes. What remains are fail-fast configuration faults and
//! submission-pipeline failures.

use thiserror::Error;

use claims_kernel::PortError;

/// Errors in policy configuration, raised at load time
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Failed to load policy configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid policy limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid waiting period: {0} days")]
    InvalidWaitingPeriod(i64),

    #[error("Invalid exclusion keyword: {0:?} (must be lowercase and non-empty)")]
    InvalidExclusion(String),
}

/// Errors from the claim submission pipeline
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The extraction service reported that it could not read the document
    #[error("Document extraction failed: {0}")]
    ExtractionFailed(String),

    /// A collaborator failed
    #[error(transparent)]
    Port(#[from] PortError),
}
