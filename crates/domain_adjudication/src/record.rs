//! Persisted claim record
//!
//! The shape handed to the persistence collaborator: informational fields
//! from the extraction, the decision fields, a generated identifier, and the
//! full raw extraction mapping kept for audit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use claims_kernel::{ClaimId, Money};

use crate::decision::{Decision, DecisionStatus};
use crate::extraction::ExtractedClaimData;
use crate::policy::PolicyConfiguration;

/// One adjudicated claim as stored downstream
#[derive(Debug, Clone, Serialize)]
pub struct ClaimRecord {
    pub id: ClaimId,
    /// Short human-facing reference, e.g. `CLM-9F2A41C7`
    pub claim_reference: String,
    pub patient_name: Option<String>,
    pub diagnosis: Option<String>,
    pub date_of_service: Option<String>,
    pub total_claimed_amount: Money,
    pub approved_amount: Money,
    pub status: DecisionStatus,
    pub confidence_score: Decimal,
    /// Ordered reason strings, stored as a list to preserve structure
    pub reasons: Vec<String>,
    /// Full raw extraction mapping, kept verbatim for audit
    pub extracted_data: Value,
    pub created_at: DateTime<Utc>,
}

impl ClaimRecord {
    /// Assembles the record for one adjudicated claim
    pub fn assemble(
        data: &ExtractedClaimData,
        raw: Value,
        decision: &Decision,
        policy: &PolicyConfiguration,
    ) -> Self {
        let id = ClaimId::new_v7();
        Self {
            id,
            claim_reference: id.reference(),
            patient_name: data.patient_name.clone(),
            diagnosis: data.diagnosis.clone(),
            date_of_service: data.date_of_service.clone(),
            total_claimed_amount: Money::new(
                data.total_claimed_amount.unwrap_or_default(),
                policy.currency,
            ),
            approved_amount: decision.approved_amount,
            status: decision.status,
            confidence_score: data.confidence_score.unwrap_or_default(),
            reasons: decision.reason_strings(),
            extracted_data: raw,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::adjudicate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_assemble_carries_decision_and_raw_data() {
        let raw = json!({
            "patient_name": "Asha Rao",
            "diagnosis": "Viral fever",
            "date_of_service": "2024-03-10",
            "total_claimed_amount": 700,
            "doctor_reg_no": "MH/12345",
            "confidence_score": 0.95,
            "line_items": [{"item": "consultation", "cost": 700}]
        });
        let policy = PolicyConfiguration::default();
        let data = ExtractedClaimData::from_value(&raw);
        let decision = adjudicate(&data, &policy);

        let record = ClaimRecord::assemble(&data, raw.clone(), &decision, &policy);

        assert_eq!(record.claim_reference, record.id.reference());
        assert_eq!(record.patient_name.as_deref(), Some("Asha Rao"));
        assert_eq!(record.status, DecisionStatus::Approved);
        assert_eq!(record.total_claimed_amount.amount(), dec!(700));
        assert_eq!(record.approved_amount.amount(), dec!(700));
        assert_eq!(record.confidence_score, dec!(0.95));
        assert!(record.reasons.is_empty());
        assert_eq!(record.extracted_data, raw);
    }

    #[test]
    fn test_reasons_stored_as_ordered_strings() {
        let raw = json!({
            "diagnosis": "checkup",
            "date_of_service": "not-a-date",
            "confidence_score": 0.9,
            "line_items": []
        });
        let policy = PolicyConfiguration::default();
        let data = ExtractedClaimData::from_value(&raw);
        let decision = adjudicate(&data, &policy);

        let record = ClaimRecord::assemble(&data, raw, &decision, &policy);

        assert_eq!(
            record.reasons,
            vec![
                "Missing or Invalid Doctor Registration Number".to_string(),
                "Invalid Date Format in Document".to_string(),
            ]
        );
    }
}
