//! Money types with precise decimal arithmetic
//!
//! All amounts handled by the analytics engine are kroner. `Money` still
//! carries its currency so that a foreign-currency figure slipping in from an
//! upstream system fails loudly instead of being summed into a NOK total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    NOK,
    SEK,
    DKK,
    EUR,
    USD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::NOK => "kr",
            Currency::SEK => "kr",
            Currency::DKK => "kr.",
            Currency::EUR => "€",
            Currency::USD => "$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NOK => "NOK",
            Currency::SEK => "SEK",
            Currency::DKK => "DKK",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
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

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Amount out of range")]
    Overflow,
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places so that pro-rata and share
/// calculations keep their precision until the figure is displayed.
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

    /// Creates a kroner amount
    pub fn nok(amount: Decimal) -> Self {
        Self::new(amount, Currency::NOK)
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

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Rounds to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp(self.currency.decimal_places()),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Multiplies by a scalar (e.g., for pro-rata and share calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(divisor)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Returns `self / other` as a plain ratio
    pub fn ratio_to(&self, other: &Money) -> Result<Decimal, MoneyError> {
        self.ensure_same_currency(other)?;
        if other.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount.checked_div(other.amount).ok_or(MoneyError::Overflow)
    }

    /// Sums amounts, starting from zero in `currency`
    ///
    /// Returns an error as soon as one of the amounts is in another currency.
    pub fn try_sum<'a, I>(currency: Currency, amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero(Currency::NOK)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::nok(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::NOK);
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::nok(dec!(100.00));
        let b = Money::nok(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-a).amount(), dec!(-100.00));
    }

    #[test]
    fn test_currency_mismatch() {
        let nok = Money::nok(dec!(100.00));
        let eur = Money::new(dec!(100.00), Currency::EUR);

        let result = nok.checked_add(&eur);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_ratio_to() {
        let cost = Money::nok(dec!(700000));
        let premium = Money::nok(dec!(1000000));
        assert_eq!(cost.ratio_to(&premium).unwrap(), dec!(0.7));
        assert_eq!(
            cost.ratio_to(&Money::zero(Currency::NOK)),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_ratio_overflow_is_an_error() {
        let huge = Money::nok(dec!(10000000000000000000000000000));
        let tiny = Money::nok(dec!(0.0001));
        assert_eq!(huge.ratio_to(&tiny), Err(MoneyError::Overflow));
        assert_eq!(huge.divide(dec!(0.0001)), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_try_sum() {
        let amounts = vec![Money::nok(dec!(10)), Money::nok(dec!(-2.5)), Money::nok(dec!(0.25))];
        let total = Money::try_sum(Currency::NOK, &amounts).unwrap();
        assert_eq!(total.amount(), dec!(7.75));

        let empty: Vec<Money> = Vec::new();
        assert!(Money::try_sum(Currency::NOK, &empty).unwrap().is_zero());
    }

    #[test]
    fn test_pro_rata_multiplication_is_exact() {
        let annual = Money::nok(dec!(1200000));
        let prorated = annual.multiply(Decimal::from(8u32) / Decimal::from(12u32));
        assert_eq!(prorated.round_to_currency().amount(), dec!(800000));
    }
}
