//! In-memory port implementations
//!
//! Test doubles for the extraction and persistence collaborators. The stub
//! extractor replays a canned payload; the recording repository keeps every
//! saved record for inspection.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use claims_kernel::{DomainPort, PortError};
use domain_adjudication::{ClaimRecord, ClaimRepository, DocumentExtractor};

/// Extractor that returns a fixed payload regardless of input
pub struct StubExtractor {
    payload: Value,
}

impl StubExtractor {
    /// Creates a stub replaying the given raw extraction mapping
    pub fn returning(payload: Value) -> Self {
        Self { payload }
    }
}

impl DomainPort for StubExtractor {}

#[async_trait]
impl DocumentExtractor for StubExtractor {
    async fn extract(&self, _content: &[u8], _media_type: &str) -> Result<Value, PortError> {
        Ok(self.payload.clone())
    }
}

/// Extractor whose transport always fails
pub struct FailingExtractor;

impl DomainPort for FailingExtractor {}

#[async_trait]
impl DocumentExtractor for FailingExtractor {
    async fn extract(&self, _content: &[u8], _media_type: &str) -> Result<Value, PortError> {
        Err(PortError::connection("extractor unreachable"))
    }
}

/// Repository that records every saved claim
#[derive(Default)]
pub struct RecordingRepository {
    saved: Mutex<Vec<ClaimRecord>>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns copies of all saved records in save order
    pub fn saved(&self) -> Vec<ClaimRecord> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DomainPort for RecordingRepository {}

#[async_trait]
impl ClaimRepository for RecordingRepository {
    async fn save(&self, record: &ClaimRecord) -> Result<(), PortError> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.clone());
        Ok(())
    }
}

/// Repository whose store is unavailable
pub struct FailingRepository;

impl DomainPort for FailingRepository {}

#[async_trait]
impl ClaimRepository for FailingRepository {
    async fn save(&self, _record: &ClaimRecord) -> Result<(), PortError> {
        Err(PortError::ServiceUnavailable {
            service: "claim store".to_string(),
        })
    }
}
