//! Unit tests for the claims kernel
//!
//! Tests cover money arithmetic, identifier formatting, and port error
//! classification.

use claims_kernel::{ClaimId, Currency, Money, MoneyError, PolicyId, PortError};
use rust_decimal_macros::dec;

mod money {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::INR);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::INR);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_checked_sub_same_currency() {
        let a = Money::new(dec!(500), Currency::INR);
        let b = Money::new(dec!(120), Currency::INR);
        assert_eq!(a.checked_sub(&b).unwrap().amount(), dec!(380));
    }

    #[test]
    fn test_capped_at_currency_mismatch() {
        let amount = Money::new(dec!(7000), Currency::INR);
        let limit = Money::new(dec!(5000), Currency::USD);
        assert!(matches!(
            amount.capped_at(&limit),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_display_uses_currency_symbol() {
        let m = Money::new(dec!(5000), Currency::INR);
        assert_eq!(m.to_string(), "₹5000");
    }
}

mod identifiers {
    use super::*;

    #[test]
    fn test_claim_id_prefix() {
        assert_eq!(ClaimId::prefix(), "CLM");
        assert_eq!(PolicyId::prefix(), "POL");
    }

    #[test]
    fn test_reference_is_stable_for_same_id() {
        let id = ClaimId::new();
        assert_eq!(id.reference(), id.reference());
    }

    #[test]
    fn test_distinct_ids_have_distinct_display() {
        let a = ClaimId::new();
        let b = ClaimId::new();
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_parse_accepts_bare_uuid() {
        let id = ClaimId::new();
        let bare = id.as_uuid().to_string();
        let parsed: ClaimId = bare.parse().unwrap();
        assert_eq!(id, parsed);
    }
}

mod port_errors {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(PortError::connection("refused").is_transient());
        assert!(PortError::ServiceUnavailable {
            service: "extractor".to_string()
        }
        .is_transient());
        assert!(!PortError::internal("bug").is_transient());
        assert!(!PortError::not_found("ClaimRecord", "x").is_transient());
    }
}
