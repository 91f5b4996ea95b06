//! Port infrastructure for external collaborators
//!
//! The adjudication core talks to two outside systems it does not implement:
//! the document extraction service and the claim record store. Each is
//! reached through a port trait defined in the domain crate; the types here
//! give those traits a shared error vocabulary and thread-safety bounds.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │           ClaimSubmissionService             │
//! └──────────────────────────────────────────────┘
//!          │                          │
//!          ▼                          ▼
//!  DocumentExtractor           ClaimRepository
//!  (OCR / vision model)        (record store)
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// All port implementations report failures through this type so the
/// service layer handles extraction and persistence faults uniformly.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The collaborator rejected the request as invalid
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout { operation: String, duration_ms: u64 },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may
    /// succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// Port traits extend this marker so implementations are guaranteed to be
/// shareable across async tasks.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("ClaimRecord", "CLM-123");
        assert!(!error.is_transient());
        assert!(error.to_string().contains("ClaimRecord"));
        assert!(error.to_string().contains("CLM-123"));
    }

    #[test]
    fn test_port_error_transient() {
        let timeout = PortError::Timeout {
            operation: "extract".to_string(),
            duration_ms: 5000,
        };
        assert!(timeout.is_transient());

        let validation = PortError::validation("unsupported media type");
        assert!(!validation.is_transient());
    }
}
