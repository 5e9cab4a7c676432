//! Money type for representing currency amounts
//!
//! Amounts are whole currency units stored as i64. There is no minor unit and
//! no floating point anywhere in balance arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed amount of whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use walletbook::models::Money;
    /// let amount = Money::new(50_000);
    /// assert_eq!(amount.units(), 50_000);
    /// ```
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Addition that returns `None` instead of overflowing
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Subtraction that returns `None` instead of overflowing
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Parse a money amount typed by a user
    ///
    /// Grouping separators are ignored, so "1.000.000", "1,000,000",
    /// "1 000 000" and "1000000" are all one million. A leading '-' makes the
    /// amount negative.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, digits_part) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let mut digits = String::with_capacity(digits_part.len());
        for c in digits_part.chars() {
            match c {
                '0'..='9' => digits.push(c),
                '.' | ',' | ' ' | '_' => {}
                _ => return Err(MoneyParseError::InvalidFormat(s.to_string())),
            }
        }

        if digits.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let units: i64 = digits
            .parse()
            .map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -units } else { units }))
    }

    /// Format with a currency symbol and thousands separator
    ///
    /// `Money::new(-1500000).format_with("Rp", '.')` gives `-Rp 1.500.000`.
    pub fn format_with(&self, symbol: &str, separator: char) -> String {
        let grouped = group_digits(self.0.unsigned_abs(), separator);
        let sign = if self.is_negative() { "-" } else { "" };
        if symbol.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{} {}", sign, symbol, grouped)
        }
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("", ','))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::new(1_500_000).to_string(), "1,500,000");
        assert_eq!(Money::new(0).to_string(), "0");
        assert_eq!(Money::new(-999).to_string(), "-999");
        assert_eq!(Money::new(-1000).to_string(), "-1,000");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(1_500_000).format_with("Rp", '.'), "Rp 1.500.000");
        assert_eq!(Money::new(-250).format_with("$", ','), "-$ 250");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        assert_eq!((-a).units(), -1000);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::new(i64::MAX);
        assert_eq!(max.checked_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MIN).checked_sub(Money::new(1)), None);
        assert_eq!(
            Money::new(1000).checked_sub(Money::new(1500)),
            Some(Money::new(-500))
        );
        assert_eq!(max.checked_sub(Money::new(1)), Some(Money::new(i64::MAX - 1)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("50000").unwrap().units(), 50_000);
        assert_eq!(Money::parse("1.000.000").unwrap().units(), 1_000_000);
        assert_eq!(Money::parse("1,000,000").unwrap().units(), 1_000_000);
        assert_eq!(Money::parse(" -500 ").unwrap().units(), -500);
        assert!(Money::parse("").is_err());
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse("-").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            Money::parse("99999999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::new(100), Money::new(200), Money::new(-50)]
            .into_iter()
            .sum();
        assert_eq!(total.units(), 250);
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
