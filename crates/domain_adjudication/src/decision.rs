//! Decision types
//!
//! The outcome of adjudicating one claim: a status, the approved amount, and
//! an ordered list of reasons covering every deduction, rejection, or flag.
//! Reasons are typed internally but persist as their human-readable strings.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use claims_kernel::Money;

/// Final status of an adjudicated claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStatus {
    /// Paid in full
    Approved,
    /// Paid with deductions
    Partial,
    /// Nothing payable
    Rejected,
    /// Deferred to a human adjuster
    ManualReview,
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionStatus::Approved => "APPROVED",
            DecisionStatus::Partial => "PARTIAL",
            DecisionStatus::Rejected => "REJECTED",
            DecisionStatus::ManualReview => "MANUAL_REVIEW",
        };
        write!(f, "{s}")
    }
}

/// Reason for a deduction, rejection, or review flag
///
/// Display renders the exact strings shown to members and stored on the
/// claim record, so downstream systems see stable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjudicationReason {
    /// Extraction confidence below the adjudication floor
    LowExtractionConfidence,
    /// Doctor registration number absent or empty
    MissingDoctorRegistration,
    /// Service date fell inside the waiting period
    WaitingPeriodViolation { days_active: i64 },
    /// Service date present but not `YYYY-MM-DD`
    InvalidServiceDate,
    /// Diagnosis matched an exclusion keyword
    ExcludedTreatment { keyword: String },
    /// A line item matched an exclusion keyword
    ExcludedLineItem { item: String },
    /// Approved amount clamped to the per-claim limit
    PerClaimLimitExceeded { limit: Money },
}

impl fmt::Display for AdjudicationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjudicationReason::LowExtractionConfidence => {
                write!(f, "AI Confidence Low - Document might be blurry or incomplete")
            }
            AdjudicationReason::MissingDoctorRegistration => {
                write!(f, "Missing or Invalid Doctor Registration Number")
            }
            AdjudicationReason::WaitingPeriodViolation { days_active } => {
                write!(f, "Waiting Period Violation (Policy age: {days_active} days)")
            }
            AdjudicationReason::InvalidServiceDate => {
                write!(f, "Invalid Date Format in Document")
            }
            AdjudicationReason::ExcludedTreatment { keyword } => {
                write!(f, "Excluded Treatment: {}", title_case(keyword))
            }
            AdjudicationReason::ExcludedLineItem { item } => {
                write!(f, "Line Item Rejected: {item}")
            }
            AdjudicationReason::PerClaimLimitExceeded { limit } => {
                write!(f, "Per-claim limit of {limit} exceeded")
            }
        }
    }
}

impl Serialize for AdjudicationReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of adjudicating one claim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub status: DecisionStatus,
    pub approved_amount: Money,
    /// Ordered; empty only when fully approved
    pub reasons: Vec<AdjudicationReason>,
}

impl Decision {
    /// Returns the reasons as their persisted string forms
    pub fn reason_strings(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

/// Title-cases a keyword: a letter following a non-letter is uppercased,
/// every other letter is lowercased ("weight loss" -> "Weight Loss")
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_was_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&DecisionStatus::ManualReview).unwrap(),
            "\"MANUAL_REVIEW\""
        );
        assert_eq!(
            serde_json::to_string(&DecisionStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
    }

    #[test]
    fn test_reason_texts() {
        assert_eq!(
            AdjudicationReason::LowExtractionConfidence.to_string(),
            "AI Confidence Low - Document might be blurry or incomplete"
        );
        assert_eq!(
            AdjudicationReason::WaitingPeriodViolation { days_active: -3 }.to_string(),
            "Waiting Period Violation (Policy age: -3 days)"
        );
        assert_eq!(
            AdjudicationReason::ExcludedTreatment {
                keyword: "hair transplant".to_string()
            }
            .to_string(),
            "Excluded Treatment: Hair Transplant"
        );
        assert_eq!(
            AdjudicationReason::ExcludedLineItem {
                item: "Cosmetic Surgery".to_string()
            }
            .to_string(),
            "Line Item Rejected: Cosmetic Surgery"
        );
        assert_eq!(
            AdjudicationReason::PerClaimLimitExceeded {
                limit: claims_kernel::Money::new(dec!(5000), Currency::INR)
            }
            .to_string(),
            "Per-claim limit of ₹5000 exceeded"
        );
    }

    #[test]
    fn test_reason_serializes_as_display_string() {
        let reason = AdjudicationReason::InvalidServiceDate;
        assert_eq!(
            serde_json::to_string(&reason).unwrap(),
            "\"Invalid Date Format in Document\""
        );
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("cosmetic"), "Cosmetic");
        assert_eq!(title_case("weight loss"), "Weight Loss");
        assert_eq!(title_case("x-ray"), "X-Ray");
        assert_eq!(title_case("VITAMIN d3"), "Vitamin D3");
    }
}
