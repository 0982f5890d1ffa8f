//! Money values and the integer-percent arithmetic used by the dashboard.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::ClubError;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// A decimal amount tagged with its currency.
///
/// All arithmetic is exact decimal arithmetic; amounts in different
/// currencies never mix silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

impl Money {
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::default())
    }

    pub fn zero(currency: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency.clone())
    }

    pub fn checked_add(&self, other: &Money) -> Result<Money, ClubError> {
        if self.currency != other.currency {
            return Err(ClubError::CurrencyMismatch(
                self.currency.as_str().into(),
                other.currency.as_str().into(),
            ));
        }
        Ok(Money::new(
            self.amount + other.amount,
            self.currency.clone(),
        ))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = minor_units_for(self.currency.as_str()) as usize;
        write!(
            f,
            "{}{:.*}",
            symbol_for(self.currency.as_str()),
            precision,
            self.amount
        )
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Integer percentage change between two period totals.
///
/// Returns `None` when the previous total is not positive; callers decide
/// whether that means a sentinel state or a flat zero.
pub fn percent_change(current: Decimal, previous: Decimal) -> Option<i64> {
    if previous <= Decimal::ZERO {
        return None;
    }
    let ratio = (current - previous) / previous * Decimal::ONE_HUNDRED;
    Some(round_to_integer(ratio))
}

/// Share of `part` in `total` as a rounded integer percentage.
///
/// A non-positive total yields 0. Shares are rounded independently, so a
/// set of shares need not sum to exactly 100.
pub fn percent_of(part: Decimal, total: Decimal) -> i64 {
    if total <= Decimal::ZERO {
        return 0;
    }
    round_to_integer(part / total * Decimal::ONE_HUNDRED)
}

// Conventional round(): halfway cases go away from zero, not to even.
fn round_to_integer(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn mixed_currency_addition_is_rejected() {
        let usd = Money::usd(dec!(10));
        let eur = Money::new(dec!(10), CurrencyCode::new("EUR"));
        let err = usd.checked_add(&eur).expect_err("currencies must match");
        assert!(matches!(err, ClubError::CurrencyMismatch(_, _)));
    }

    #[test]
    fn percent_change_rounds_half_away_from_zero() {
        assert_eq!(percent_change(dec!(225), dec!(200)), Some(13)); // 12.5
        assert_eq!(percent_change(dec!(175), dec!(200)), Some(-13)); // -12.5
        assert_eq!(percent_change(dec!(150), dec!(100)), Some(50));
    }

    #[test]
    fn percent_change_without_prior_period_is_none() {
        assert_eq!(percent_change(dec!(100), dec!(0)), None);
    }

    #[test]
    fn percent_of_handles_zero_total() {
        assert_eq!(percent_of(dec!(50), dec!(0)), 0);
        assert_eq!(percent_of(dec!(100), dec!(150)), 67);
        assert_eq!(percent_of(dec!(50), dec!(150)), 33);
    }

    #[test]
    fn display_uses_currency_symbol() {
        assert_eq!(Money::usd(dec!(1234.5)).to_string(), "$1234.50");
    }
}
