//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts keep the exact precision they
//! were entered with. Display always rounds to two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbol used by the plain `Display` implementation
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Parsed amounts must be strictly smaller than this many whole units
const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
}

fn split_sign(s: &str) -> (Option<Sign>, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (Some(Sign::Minus), rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (Some(Sign::Plus), rest)
    } else {
        (None, s)
    }
}

/// Represents a monetary amount as an exact decimal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Add two amounts, or `None` if the result is out of range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10.50", "$10.50", "$-10.50",
    /// "1,234.50", "10". Exponents are rejected, as are amounts whose
    /// magnitude reaches `MAX_AMOUNT`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (sign, rest) = split_sign(trimmed);
        let rest = rest.strip_prefix(DEFAULT_CURRENCY_SYMBOL).unwrap_or(rest);
        // "$-10.50" puts the sign after the symbol
        let (sign, rest) = match sign {
            Some(_) => (sign, rest),
            None => split_sign(rest),
        };

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        if !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            || !digits.chars().any(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let value = Decimal::from_str(&digits).map_err(|_| invalid())?;
        if value >= Decimal::from(MAX_AMOUNT) {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }

        Ok(Self(if sign == Some(Sign::Minus) { -value } else { value }))
    }

    /// Format with a currency symbol, thousands separators and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{:.2}", rounded.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
    }
}

/// Insert a comma between every group of three integer digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
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
