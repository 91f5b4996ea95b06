//! Money types with precise decimal arithmetic
//!
//! Monetary values in the adjudication pipeline are represented with
//! rust_decimal so that approved amounts and limit comparisons never go
//! through floating point.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Currency codes following ISO 4217
///
/// The adjudication engine is currency-agnostic; the set here covers the
/// markets the claims pipeline currently operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    INR,
    USD,
    EUR,
    GBP,
    SGD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::SGD => "S$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::SGD => "SGD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount with associated currency
///
/// Amounts are rounded to four decimal places internally; display uses the
/// currency's standard precision with trailing zeros trimmed, so that a
/// five-thousand-rupee limit renders as `₹5000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Caps this amount at `limit`, returning whichever is smaller
    ///
    /// Used for per-claim limit clamping. Errors on currency mismatch.
    pub fn capped_at(&self, limit: &Money) -> Result<Money, MoneyError> {
        self.same_currency(limit)?;
        Ok(if self.amount > limit.amount {
            *limit
        } else {
            *self
        })
    }

    fn same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

/// Ordering is only defined between amounts of the same currency
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.amount.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(250.50), Currency::INR);
        assert_eq!(m.amount(), dec!(250.50));
        assert_eq!(m.currency(), Currency::INR);
    }

    #[test]
    fn test_money_checked_add() {
        let a = Money::new(dec!(100.00), Currency::INR);
        let b = Money::new(dec!(50.00), Currency::INR);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.00));
    }

    #[test]
    fn test_currency_mismatch() {
        let inr = Money::new(dec!(100.00), Currency::INR);
        let usd = Money::new(dec!(100.00), Currency::USD);
        let result = inr.checked_add(&usd);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_capped_at_above_limit() {
        let amount = Money::new(dec!(7000), Currency::INR);
        let limit = Money::new(dec!(5000), Currency::INR);
        assert_eq!(amount.capped_at(&limit).unwrap(), limit);
    }

    #[test]
    fn test_capped_at_below_limit() {
        let amount = Money::new(dec!(200), Currency::INR);
        let limit = Money::new(dec!(5000), Currency::INR);
        assert_eq!(amount.capped_at(&limit).unwrap(), amount);
    }

    #[test]
    fn test_ordering_same_currency() {
        let small = Money::new(dec!(200), Currency::INR);
        let big = Money::new(dec!(5000), Currency::INR);
        assert!(small < big);
    }

    #[test]
    fn test_ordering_across_currencies_undefined() {
        let inr = Money::new(dec!(200), Currency::INR);
        let usd = Money::new(dec!(200), Currency::USD);
        assert_eq!(inr.partial_cmp(&usd), None);
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        let m = Money::new(dec!(5000.00), Currency::INR);
        assert_eq!(m.to_string(), "₹5000");

        let m = Money::new(dec!(199.50), Currency::USD);
        assert_eq!(m.to_string(), "$199.5");
    }
}
