//! Claim submission service
//!
//! Orchestrates the pipeline around the pure engine: extract fields from the
//! uploaded document, gate on extraction failure, adjudicate against the
//! current policy snapshot, assemble the record, and persist it. The
//! extraction and persistence collaborators sit behind port traits.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use claims_kernel::{DomainPort, PortError};

use crate::engine::adjudicate;
use crate::error::SubmissionError;
use crate::extraction::ExtractedClaimData;
use crate::policy::{PolicyConfiguration, PolicyStore};
use crate::record::ClaimRecord;

/// Port to the document extraction collaborator
///
/// Returns the raw field mapping read from the document. A mapping carrying
/// an `"error"` key signals that extraction itself failed; the service
/// rejects such results before adjudication.
#[async_trait]
pub trait DocumentExtractor: DomainPort {
    async fn extract(&self, content: &[u8], media_type: &str) -> Result<Value, PortError>;
}

/// Port to the claim record store
#[async_trait]
pub trait ClaimRepository: DomainPort {
    async fn save(&self, record: &ClaimRecord) -> Result<(), PortError>;
}

/// Application service for the one inbound operation: submit a claim
/// document, get back a decision record
pub struct ClaimSubmissionService {
    extractor: Arc<dyn DocumentExtractor>,
    repository: Arc<dyn ClaimRepository>,
    policies: PolicyStore,
}

impl ClaimSubmissionService {
    /// Creates the service with the given collaborators and active policy
    pub fn new(
        extractor: Arc<dyn DocumentExtractor>,
        repository: Arc<dyn ClaimRepository>,
        policy: PolicyConfiguration,
    ) -> Self {
        Self {
            extractor,
            repository,
            policies: PolicyStore::new(policy),
        }
    }

    /// Swaps in a new policy for subsequent submissions
    pub fn replace_policy(&self, policy: PolicyConfiguration) {
        self.policies.replace(policy);
    }

    /// Processes one claim document end to end
    pub async fn submit(
        &self,
        content: &[u8],
        media_type: &str,
    ) -> Result<ClaimRecord, SubmissionError> {
        let raw = self.extractor.extract(content, media_type).await?;

        if let Some(error) = raw.get("error") {
            let message = error
                .as_str()
                .unwrap_or("extraction reported an error")
                .to_string();
            warn!(%message, "rejecting claim document, extraction failed");
            return Err(SubmissionError::ExtractionFailed(message));
        }

        let data = ExtractedClaimData::from_value(&raw);
        let policy = self.policies.current();
        let decision = adjudicate(&data, &policy);
        let record = ClaimRecord::assemble(&data, raw, &decision, &policy);

        self.repository.save(&record).await?;
        info!(
            claim = %record.claim_reference,
            status = %record.status,
            approved = %record.approved_amount,
            "claim adjudicated"
        );
        Ok(record)
    }
}
