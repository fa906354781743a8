//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::AmountIssue;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// The amount as a floating point number of whole units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Divide by a count, rounding half away from zero to the nearest cent
    ///
    /// Returns `None` when `count` is zero.
    pub fn div_round(&self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let count = count as i64;
        let half = count / 2;
        let rounded = if self.0 >= 0 {
            (self.0 + half) / count
        } else {
            (self.0 - half) / count
        };
        Some(Self(rounded))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5", "1e3",
    /// "1.5E2". The value must be exact in cents: "10.990" is accepted,
    /// "10.999" is `TooPrecise`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        // Remove currency symbol if present
        let rest = rest
            .strip_prefix('$')
            .or_else(|| rest.strip_prefix('₹'))
            .unwrap_or(rest);

        let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                (mantissa, exponent.parse::<i64>().map_err(|_| invalid())?)
            }
            None => (rest, 0),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        // All significant digits, and how many of them sit right of the point
        let digits = format!("{}{}", whole, fraction);
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Self::zero());
        }
        let scale = (fraction.len() as i64).saturating_sub(exponent);

        let (digits, shift) = if scale > 2 {
            let excess = usize::try_from(scale - 2).unwrap_or(usize::MAX);
            let exact = excess < digits.len() && all_zeros(&digits[digits.len() - excess..]);
            if !exact {
                return Err(MoneyParseError::TooPrecise(s.to_string()));
            }
            (&digits[..digits.len() - excess], 0)
        } else {
            (digits, 2i64.saturating_sub(scale))
        };

        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());
        let value: i64 = digits.parse().map_err(|_| out_of_range())?;
        let factor = u32::try_from(shift)
            .ok()
            .and_then(|shift| 10i64.checked_pow(shift))
            .ok_or_else(out_of_range)?;
        let cents = value.checked_mul(factor).ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0 {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain decimal form (`10.50`), as written to the expense file
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.format_with_symbol("");
        f.pad(&text)
    }
}

/// Saturates at the `i64` bounds instead of overflowing
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

fn all_zeros(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Not a decimal number
    InvalidFormat(String),
    /// Non-zero digits below one cent
    TooPrecise(String),
    /// Does not fit in `i64` cents
    OutOfRange(String),
}

impl MoneyParseError {
    /// The matching reason for rejecting an amount
    pub fn amount_issue(&self) -> AmountIssue {
        match self {
            MoneyParseError::InvalidFormat(_) => AmountIssue::NotANumber,
            MoneyParseError::TooPrecise(_) => AmountIssue::TooPrecise,
            MoneyParseError::OutOfRange(_) => AmountIssue::TooLarge,
        }
    }
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "More than two decimal places: {}", s)
            }
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(format!("{:>8}", Money::from_cents(5000)), "   50.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(15000).format_with_symbol("₹"), "₹150.00");
        assert_eq!(Money::from_cents(-250).format_with_symbol("$"), "-$2.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse(" 100 ").unwrap().cents(), 10000);
        assert_eq!(Money::parse("10.990").unwrap().cents(), 1099);
        assert_eq!(Money::parse("0.000").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(Money::parse("1e3").unwrap().cents(), 100_000);
        assert_eq!(Money::parse("1.5E2").unwrap().cents(), 15_000);
        assert_eq!(Money::parse("125e-2").unwrap().cents(), 125);
        assert_eq!(Money::parse("2e+1").unwrap().cents(), 2_000);
        assert!(Money::parse("1e").is_err());
        assert!(Money::parse("e3").is_err());
        assert!(Money::parse("1e1e1").is_err());
    }

    #[test]
    fn test_parse_rejects_sub_cent_digits() {
        let too_precise = |s: &str| MoneyParseError::TooPrecise(s.to_string());
        assert_eq!(Money::parse("0.001"), Err(too_precise("0.001")));
        assert_eq!(Money::parse("10.999"), Err(too_precise("10.999")));
        assert_eq!(Money::parse("12.349"), Err(too_precise("12.349")));
        assert_eq!(Money::parse("1e-3"), Err(too_precise("1e-3")));
        assert_eq!(Money::parse("1e-999999999999"), Err(too_precise("1e-999999999999")));
    }

    #[test]
    fn test_parse_out_of_range() {
        let out_of_range = |s: &str| MoneyParseError::OutOfRange(s.to_string());
        assert_eq!(
            Money::parse("99999999999999999999"),
            Err(out_of_range("99999999999999999999"))
        );
        assert_eq!(Money::parse("1e30"), Err(out_of_range("1e30")));
        assert_eq!(Money::parse("1e99999999999"), Err(out_of_range("1e99999999999")));
        let max_exponent = format!("1e{}", i64::MAX);
        assert_eq!(Money::parse(&max_exponent), Err(out_of_range(&max_exponent)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12x").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.é").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("NaN").is_err());
    }

    #[test]
    fn test_div_round() {
        assert_eq!(Money::from_cents(15000).div_round(2), Some(Money::from_cents(7500)));
        assert_eq!(Money::from_cents(100).div_round(3), Some(Money::from_cents(33)));
        assert_eq!(Money::from_cents(200).div_round(3), Some(Money::from_cents(67)));
        assert_eq!(Money::from_cents(5).div_round(2), Some(Money::from_cents(3)));
        assert_eq!(Money::from_cents(100).div_round(0), None);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_sum_saturates() {
        let huge = Money::from_cents(i64::MAX - 10);
        let total: Money = [huge, huge, Money::from_cents(5)].iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut running = huge;
        running += Money::from_cents(100);
        assert_eq!(running.cents(), i64::MAX);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
