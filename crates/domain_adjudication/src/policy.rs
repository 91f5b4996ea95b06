//! Policy configuration
//!
//! An immutable description of coverage rules: when the policy went into
//! force, how long the waiting period runs, what the monetary limits are,
//! and which treatment keywords are never covered. One configuration value
//! is passed into every adjudication; per-product policies are just separate
//! values.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use claims_kernel::{Currency, Money};

use crate::error::PolicyError;

/// Monetary limits declared by the policy
///
/// Only `per_claim` is enforced by the engine today. `annual` and
/// `consultation_sublimit` are carried for product configuration parity but
/// deliberately not applied; enforcing them would change financial outcomes
/// and needs a product decision first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyLimits {
    pub per_claim: Decimal,
    pub annual: Decimal,
    pub consultation_sublimit: Decimal,
}

/// Coverage rules for one insurance product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfiguration {
    /// Date the policy became effective
    pub active_since: NaiveDate,
    /// Minimum days between activation and service date before claims pay
    pub waiting_period_days: i64,
    /// Currency all limits and approved amounts are denominated in
    #[serde(default = "PolicyConfiguration::default_currency")]
    pub currency: Currency,
    pub limits: PolicyLimits,
    /// Lowercase keywords; a substring match in a diagnosis or line item
    /// triggers exclusion
    pub exclusions: Vec<String>,
}

impl PolicyConfiguration {
    fn default_currency() -> Currency {
        Currency::INR
    }

    /// Loads configuration from a file, with `POLICY_*` environment
    /// variables layered on top
    pub fn load(path: &str) -> Result<Self, PolicyError> {
        let policy: PolicyConfiguration = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("POLICY").separator("__"),
            )
            .build()?
            .try_deserialize()?;
        policy.validate()?;
        Ok(policy)
    }

    /// Validates the configuration, failing fast on programming errors
    ///
    /// Malformed claim data degrades into decision outcomes, but a broken
    /// policy must never reach the engine.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.waiting_period_days < 0 {
            return Err(PolicyError::InvalidWaitingPeriod(self.waiting_period_days));
        }
        for (name, value) in [
            ("per_claim", self.limits.per_claim),
            ("annual", self.limits.annual),
            ("consultation_sublimit", self.limits.consultation_sublimit),
        ] {
            if value.is_sign_negative() {
                return Err(PolicyError::InvalidLimit(format!("{name} = {value}")));
            }
        }
        for keyword in &self.exclusions {
            if keyword.trim().is_empty() || *keyword != keyword.to_lowercase() {
                return Err(PolicyError::InvalidExclusion(keyword.clone()));
            }
        }
        Ok(())
    }

    /// Returns the per-claim limit as a money value
    pub fn per_claim_limit(&self) -> Money {
        Money::new(self.limits.per_claim, self.currency)
    }
}

impl Default for PolicyConfiguration {
    /// The standard retail health product
    fn default() -> Self {
        Self {
            active_since: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            waiting_period_days: 30,
            currency: Currency::INR,
            limits: PolicyLimits {
                per_claim: dec!(5000),
                annual: dec!(50000),
                consultation_sublimit: dec!(1000),
            },
            exclusions: vec![
                "cosmetic".to_string(),
                "weight loss".to_string(),
                "whitening".to_string(),
                "hair transplant".to_string(),
                "supplement".to_string(),
                "vitamin".to_string(),
            ],
        }
    }
}

/// Snapshot holder for hot-reloadable policy configuration
///
/// In-flight adjudications keep the `Arc` they took; a replace swaps the
/// pointer for subsequent calls and never mutates a configuration in place.
#[derive(Debug)]
pub struct PolicyStore {
    current: RwLock<Arc<PolicyConfiguration>>,
}

impl PolicyStore {
    /// Creates a store holding the given configuration
    pub fn new(policy: PolicyConfiguration) -> Self {
        Self {
            current: RwLock::new(Arc::new(policy)),
        }
    }

    /// Returns the current snapshot
    pub fn current(&self) -> Arc<PolicyConfiguration> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replaces the configuration for subsequent adjudications
    pub fn replace(&self, policy: PolicyConfiguration) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(policy);
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new(PolicyConfiguration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(PolicyConfiguration::default().validate().is_ok());
    }

    #[test]
    fn test_negative_waiting_period_rejected() {
        let policy = PolicyConfiguration {
            waiting_period_days: -5,
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::InvalidWaitingPeriod(-5))
        ));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let mut policy = PolicyConfiguration::default();
        policy.limits.annual = dec!(-1);
        assert!(matches!(policy.validate(), Err(PolicyError::InvalidLimit(_))));
    }

    #[test]
    fn test_uppercase_exclusion_rejected() {
        let mut policy = PolicyConfiguration::default();
        policy.exclusions.push("Cosmetic".to_string());
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::InvalidExclusion(_))
        ));
    }

    #[test]
    fn test_empty_exclusion_rejected() {
        let mut policy = PolicyConfiguration::default();
        policy.exclusions.push("  ".to_string());
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::InvalidExclusion(_))
        ));
    }

    #[test]
    fn test_per_claim_limit_money() {
        let policy = PolicyConfiguration::default();
        assert_eq!(policy.per_claim_limit().to_string(), "₹5000");
    }

    #[test]
    fn test_store_swaps_snapshot() {
        let store = PolicyStore::default();
        let before = store.current();

        let mut updated = PolicyConfiguration::default();
        updated.waiting_period_days = 90;
        store.replace(updated);

        // The old snapshot is untouched; new calls see the replacement
        assert_eq!(before.waiting_period_days, 30);
        assert_eq!(store.current().waiting_period_days, 90);
    }
}
