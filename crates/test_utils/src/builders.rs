//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use claims_kernel::Currency;
use domain_adjudication::{ExtractedClaimData, PolicyConfiguration, PolicyLimits};

/// Builder for extraction payloads
///
/// Defaults describe a claim that passes every check, so each builder call
/// isolates exactly one rule.
pub struct ExtractedClaimDataBuilder {
    patient_name: Option<String>,
    diagnosis: Option<String>,
    date_of_service: Option<String>,
    total_claimed_amount: Option<Decimal>,
    doctor_reg_no: Option<String>,
    confidence_score: Option<Decimal>,
    line_items: Vec<Value>,
}

impl Default for ExtractedClaimDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractedClaimDataBuilder {
    /// Creates a builder with passing defaults and a random patient name
    pub fn new() -> Self {
        Self {
            patient_name: Some(Name().fake()),
            diagnosis: Some("Viral fever".to_string()),
            date_of_service: Some("2024-03-10".to_string()),
            total_claimed_amount: Some(dec!(700)),
            doctor_reg_no: Some("MH/12345".to_string()),
            confidence_score: Some(dec!(0.95)),
            line_items: vec![json!({"item": "consultation", "cost": 700})],
        }
    }

    /// Sets the diagnosis text
    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = Some(diagnosis.into());
        self
    }

    /// Removes the diagnosis entirely
    pub fn without_diagnosis(mut self) -> Self {
        self.diagnosis = None;
        self
    }

    /// Sets the service date string as it appeared on the document
    pub fn with_service_date(mut self, date: impl Into<String>) -> Self {
        self.date_of_service = Some(date.into());
        self
    }

    /// Removes the service date
    pub fn without_service_date(mut self) -> Self {
        self.date_of_service = None;
        self
    }

    /// Sets the claimed total
    pub fn with_claimed_amount(mut self, amount: Decimal) -> Self {
        self.total_claimed_amount = Some(amount);
        self
    }

    /// Sets the doctor registration number
    pub fn with_doctor_reg_no(mut self, reg_no: impl Into<String>) -> Self {
        self.doctor_reg_no = Some(reg_no.into());
        self
    }

    /// Removes the doctor registration number
    pub fn without_doctor_reg_no(mut self) -> Self {
        self.doctor_reg_no = None;
        self
    }

    /// Sets the extraction confidence
    pub fn with_confidence(mut self, score: Decimal) -> Self {
        self.confidence_score = Some(score);
        self
    }

    /// Replaces all line items
    pub fn with_line_items(mut self, items: Vec<Value>) -> Self {
        self.line_items = items;
        self
    }

    /// Appends a well-formed line item
    pub fn with_line_item(mut self, item: impl Into<String>, cost: Decimal) -> Self {
        self.line_items.push(json!({"item": item.into(), "cost": cost}));
        self
    }

    /// Appends a raw (possibly malformed) line item
    pub fn with_raw_line_item(mut self, raw: Value) -> Self {
        self.line_items.push(raw);
        self
    }

    /// Builds the extraction payload
    pub fn build(self) -> ExtractedClaimData {
        ExtractedClaimData {
            patient_name: self.patient_name,
            diagnosis: self.diagnosis,
            date_of_service: self.date_of_service,
            total_claimed_amount: self.total_claimed_amount,
            doctor_reg_no: self.doctor_reg_no,
            confidence_score: self.confidence_score,
            line_items: self.line_items,
        }
    }
}

/// Builder for policy configurations
pub struct PolicyConfigurationBuilder {
    active_since: NaiveDate,
    waiting_period_days: i64,
    currency: Currency,
    per_claim: Decimal,
    annual: Decimal,
    consultation_sublimit: Decimal,
    exclusions: Vec<String>,
}

impl Default for PolicyConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyConfigurationBuilder {
    /// Creates a builder mirroring the standard retail policy
    pub fn new() -> Self {
        let standard = PolicyConfiguration::default();
        Self {
            active_since: standard.active_since,
            waiting_period_days: standard.waiting_period_days,
            currency: standard.currency,
            per_claim: standard.limits.per_claim,
            annual: standard.limits.annual,
            consultation_sublimit: standard.limits.consultation_sublimit,
            exclusions: standard.exclusions,
        }
    }

    /// Sets the activation date
    pub fn active_since(mut self, date: NaiveDate) -> Self {
        self.active_since = date;
        self
    }

    /// Sets the waiting period in days
    pub fn waiting_period_days(mut self, days: i64) -> Self {
        self.waiting_period_days = days;
        self
    }

    /// Sets the currency
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the per-claim limit
    pub fn per_claim_limit(mut self, limit: Decimal) -> Self {
        self.per_claim = limit;
        self
    }

    /// Replaces the exclusion keyword list
    pub fn exclusions(mut self, keywords: Vec<&str>) -> Self {
        self.exclusions = keywords.into_iter().map(str::to_string).collect();
        self
    }

    /// Builds the configuration
    pub fn build(self) -> PolicyConfiguration {
        PolicyConfiguration {
            active_since: self.active_since,
            waiting_period_days: self.waiting_period_days,
            currency: self.currency,
            limits: PolicyLimits {
                per_claim: self.per_claim,
                annual: self.annual,
                consultation_sublimit: self.consultation_sublimit,
            },
            exclusions: self.exclusions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_adjudication::{adjudicate, DecisionStatus};

    #[test]
    fn test_default_builder_output_is_approved() {
        let data = ExtractedClaimDataBuilder::new().build();
        let policy = PolicyConfigurationBuilder::new().build();

        let decision = adjudicate(&data, &policy);
        assert_eq!(decision.status, DecisionStatus::Approved);
    }

    #[test]
    fn test_builder_policy_is_valid() {
        assert!(PolicyConfigurationBuilder::new().build().validate().is_ok());
    }
}
