//! The adjudication engine
//!
//! A pure function from extracted claim data and a policy configuration to a
//! decision. It never fails: data-quality problems become reasons and status
//! changes, and truly unreliable input is routed to manual review.
//!
//! Evaluation runs through ordered stages that share one decision register.
//! Order is load-bearing: a later stage may overwrite what an earlier one
//! decided. In particular, an unparseable service date moves a claim to
//! manual review even if the doctor-registration check already rejected it,
//! and line-item evaluation recomputes the amount from scratch whenever the
//! diagnosis check did not reject.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use claims_kernel::Money;

use crate::decision::{AdjudicationReason, Decision, DecisionStatus};
use crate::extraction::{ClaimFacts, ExtractedClaimData, ServiceDate};
use crate::policy::PolicyConfiguration;

/// Minimum extraction confidence for automated adjudication
pub const CONFIDENCE_FLOOR: Decimal = dec!(0.70);

/// Adjudicates one claim against one policy
///
/// Stateless and deterministic: identical inputs always produce the
/// identical decision, and no wall-clock time is consulted. Safe to call
/// concurrently from any number of tasks.
pub fn adjudicate(data: &ExtractedClaimData, policy: &PolicyConfiguration) -> Decision {
    let facts = ClaimFacts::from_extracted(data);

    // Hard gate: nothing below is trustworthy if the extraction itself
    // was unreliable.
    if facts.confidence_score < CONFIDENCE_FLOOR {
        debug!(confidence = %facts.confidence_score, "confidence below floor, deferring to manual review");
        return Decision {
            status: DecisionStatus::ManualReview,
            approved_amount: Money::zero(policy.currency),
            reasons: vec![AdjudicationReason::LowExtractionConfidence],
        };
    }

    let mut register = DecisionRegister::new(facts.claimed_amount);
    register.check_doctor_registration(&facts);
    register.check_waiting_period(&facts, policy);
    register.check_diagnosis_exclusions(&facts, policy);
    if register.status != DecisionStatus::Rejected {
        register.evaluate_line_items(&facts, policy);
    }
    register.apply_per_claim_limit(policy);
    register.finalize_zero_amount();

    debug!(status = %register.status, amount = %register.amount, "adjudication complete");
    register.into_decision(policy)
}

/// Mutable state threaded through the evaluation stages
///
/// Every path that moves `status` away from `Approved` also pushes a
/// reason, which is how the decision invariant (non-approved implies
/// non-empty reasons) holds by construction.
struct DecisionRegister {
    status: DecisionStatus,
    amount: Decimal,
    reasons: Vec<AdjudicationReason>,
}

impl DecisionRegister {
    fn new(claimed_amount: Decimal) -> Self {
        Self {
            status: DecisionStatus::Approved,
            amount: claimed_amount,
            reasons: Vec::new(),
        }
    }

    /// Stage 2: a missing registration number rejects the claim but does
    /// not short-circuit; later stages still run
    fn check_doctor_registration(&mut self, facts: &ClaimFacts) {
        if facts.doctor_reg_no.is_empty() {
            self.reasons.push(AdjudicationReason::MissingDoctorRegistration);
            self.status = DecisionStatus::Rejected;
        }
    }

    /// Stage 3: waiting-period enforcement, skipped when no date was read
    ///
    /// An unparseable date overrides an earlier rejection with manual
    /// review: a human has to look at the document anyway.
    fn check_waiting_period(&mut self, facts: &ClaimFacts, policy: &PolicyConfiguration) {
        match facts.service_date {
            ServiceDate::Missing => {}
            ServiceDate::Unparseable => {
                self.reasons.push(AdjudicationReason::InvalidServiceDate);
                self.status = DecisionStatus::ManualReview;
            }
            ServiceDate::On(service_date) => {
                // Negative when the service predates activation; that is
                // just a larger violation.
                let days_active = (service_date - policy.active_since).num_days();
                if days_active < policy.waiting_period_days {
                    self.status = DecisionStatus::Rejected;
                    self.reasons
                        .push(AdjudicationReason::WaitingPeriodViolation { days_active });
                    self.amount = Decimal::ZERO;
                }
            }
        }
    }

    /// Stage 4: first matching diagnosis keyword rejects and stops the scan
    fn check_diagnosis_exclusions(&mut self, facts: &ClaimFacts, policy: &PolicyConfiguration) {
        for keyword in &policy.exclusions {
            if facts.diagnosis.contains(keyword.as_str()) {
                debug!(keyword = %keyword, "diagnosis matched exclusion");
                self.status = DecisionStatus::Rejected;
                self.reasons.push(AdjudicationReason::ExcludedTreatment {
                    keyword: keyword.clone(),
                });
                self.amount = Decimal::ZERO;
                break;
            }
        }
    }

    /// Stage 5: recomputes the amount as the sum of non-excluded items
    ///
    /// Runs whenever stage 4 did not reject, including under a running
    /// manual-review status. Every excluded item gets its own reason and
    /// flips the status to partial.
    fn evaluate_line_items(&mut self, facts: &ClaimFacts, policy: &PolicyConfiguration) {
        let mut total = Decimal::ZERO;
        for line in &facts.line_items {
            let description = line.item.to_lowercase();
            let excluded = policy
                .exclusions
                .iter()
                .any(|keyword| description.contains(keyword.as_str()));
            if excluded {
                self.reasons.push(AdjudicationReason::ExcludedLineItem {
                    item: line.item.clone(),
                });
                self.status = DecisionStatus::Partial;
            } else {
                total += line.cost;
            }
        }
        self.amount = total;
    }

    /// Stage 6: clamps to the per-claim limit; only a clean approval is
    /// downgraded to partial
    fn apply_per_claim_limit(&mut self, policy: &PolicyConfiguration) {
        if self.amount > policy.limits.per_claim {
            self.reasons.push(AdjudicationReason::PerClaimLimitExceeded {
                limit: policy.per_claim_limit(),
            });
            self.amount = policy.limits.per_claim;
            if self.status == DecisionStatus::Approved {
                self.status = DecisionStatus::Partial;
            }
        }
    }

    /// Stage 7: nothing payable means rejected, unless a human is already
    /// going to look at it
    fn finalize_zero_amount(&mut self) {
        if self.amount.is_zero() && self.status != DecisionStatus::ManualReview {
            self.status = DecisionStatus::Rejected;
        }
    }

    fn into_decision(self, policy: &PolicyConfiguration) -> Decision {
        Decision {
            status: self.status,
            approved_amount: Money::new(self.amount, policy.currency),
            reasons: self.reasons,
        }
    }
}
