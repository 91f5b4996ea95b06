//! Pre-built Test Fixtures
//!
//! Ready-to-use policies and extraction payloads. Values are consistent and
//! predictable so tests can assert exact amounts and reason strings.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use claims_kernel::Currency;
use domain_adjudication::{ExtractedClaimData, PolicyConfiguration, PolicyLimits};

/// The standard retail health policy used across the suite
pub static STANDARD_POLICY: Lazy<PolicyConfiguration> =
    Lazy::new(PolicyConfiguration::default);

/// Fixture for policy configurations
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// The default policy: active 2024-01-01, 30-day wait, ₹5000 per claim
    pub fn standard() -> PolicyConfiguration {
        PolicyConfiguration::default()
    }

    /// A policy with no waiting period, for date-focused tests
    pub fn no_waiting_period() -> PolicyConfiguration {
        PolicyConfiguration {
            waiting_period_days: 0,
            ..PolicyConfiguration::default()
        }
    }

    /// A USD-denominated policy with a tight per-claim limit
    pub fn usd_low_limit() -> PolicyConfiguration {
        PolicyConfiguration {
            active_since: NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date"),
            waiting_period_days: 15,
            currency: Currency::USD,
            limits: PolicyLimits {
                per_claim: dec!(1000),
                annual: dec!(20000),
                consultation_sublimit: dec!(250),
            },
            exclusions: vec!["cosmetic".to_string(), "supplement".to_string()],
        }
    }
}

/// Fixture for extraction payloads
pub struct ClaimDataFixtures;

impl ClaimDataFixtures {
    /// A clean claim that passes every check: two line items totalling ₹700
    pub fn clean() -> ExtractedClaimData {
        ExtractedClaimData::from_value(&Self::clean_raw())
    }

    /// The raw mapping behind [`ClaimDataFixtures::clean`]
    pub fn clean_raw() -> Value {
        json!({
            "patient_name": "Asha Rao",
            "diagnosis": "Viral fever",
            "date_of_service": "2024-03-10",
            "total_claimed_amount": 700,
            "doctor_reg_no": "MH/12345",
            "confidence_score": 0.95,
            "line_items": [
                {"item": "consultation", "cost": 500},
                {"item": "paracetamol", "cost": 200}
            ]
        })
    }

    /// A blurry scan: everything valid except the confidence score
    pub fn low_confidence() -> ExtractedClaimData {
        let mut data = Self::clean();
        data.confidence_score = Some(dec!(0.40));
        data
    }

    /// A claim whose diagnosis hits the "cosmetic" exclusion
    pub fn excluded_diagnosis() -> ExtractedClaimData {
        let mut data = Self::clean();
        data.diagnosis = Some("Cosmetic dental work".to_string());
        data
    }

    /// A raw mapping signalling extraction failure
    pub fn extraction_error_raw() -> Value {
        json!({"error": "AI Processing Failed"})
    }
}
