//! Custom Test Assertions
//!
//! Decision-focused assertion helpers with messages that show the full
//! decision on failure.

use rust_decimal::Decimal;

use domain_adjudication::{Decision, DecisionStatus};

/// Asserts the decision status and approved amount in one step
pub fn assert_decision(decision: &Decision, status: DecisionStatus, amount: Decimal) {
    assert_eq!(
        decision.status, status,
        "unexpected status in decision: {decision:?}"
    );
    assert_eq!(
        decision.approved_amount.amount(),
        amount,
        "unexpected approved amount in decision: {decision:?}"
    );
}

/// Asserts the claim was fully approved with no reasons
pub fn assert_fully_approved(decision: &Decision, amount: Decimal) {
    assert_decision(decision, DecisionStatus::Approved, amount);
    assert!(
        decision.reasons.is_empty(),
        "approved decision carries reasons: {decision:?}"
    );
}

/// Asserts some reason string contains the given fragment
pub fn assert_has_reason_containing(decision: &Decision, fragment: &str) {
    assert!(
        decision
            .reason_strings()
            .iter()
            .any(|r| r.contains(fragment)),
        "no reason containing {fragment:?} in decision: {decision:?}"
    );
}

/// Asserts that a non-approved decision explains itself
///
/// The zero-amount finalization stage rejects without appending a reason,
/// so the check applies only when something was actually approved.
pub fn assert_reasons_invariant(decision: &Decision) {
    if decision.status != DecisionStatus::Approved && !decision.approved_amount.is_zero() {
        assert!(
            !decision.reasons.is_empty(),
            "non-approved decision without reasons: {decision:?}"
        );
    }
}
