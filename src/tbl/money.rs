use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}: {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point currency value with four decimal places, ie. `Money(12_3400)` is 12.34
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const SCALE: i64 = 10_000;
    const FRACTION_DIGITS: usize = 4;

    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Whole currency units, ie. `Money::units(500)` is 500.00
    pub const fn units(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    /// Parses operator input such as `100`, `-2.5` or `12,34`
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let normalized = unsigned.replace(',', ".");
        let mut parts = normalized.split('.');

        if normalized.split('.').count() > 2 {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        let whole = parts.next().unwrap_or("");
        let fraction = parts.next().unwrap_or("");

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyError::Parse("No digits found", string.to_string()));
        }

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !is_digits(whole) || !is_digits(fraction) {
            return Err(MoneyError::Parse("Unexpected character", string.to_string()));
        }

        if fraction.len() > Self::FRACTION_DIGITS {
            return Err(MoneyError::Parse("Too many decimal places", string.to_string()));
        }

        let overflow = || MoneyError::Parse("Value out of range", string.to_string());

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };

        let fraction: i64 = format!("{:0<width$}", fraction, width = Self::FRACTION_DIGITS)
            .parse()
            .map_err(|_| overflow())?;

        let value = whole
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(overflow)?;

        Ok(Self(if negative { -value } else { value }))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds `other` in place, leaving `self` untouched when the result would not fit
    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        self.0 = match self.0.checked_add(other.0) {
            Some(sum) => sum,
            None if other.0 > 0 => return Err(MoneyError::Overflow("add", *self, *other)),
            None => return Err(MoneyError::Underflow("add", *self, *other)),
        };

        Ok(())
    }

    /// Subtracts `other` in place, leaving `self` untouched when the result would not fit
    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        self.0 = match self.0.checked_sub(other.0) {
            Some(diff) => diff,
            None if other.0 < 0 => return Err(MoneyError::Overflow("sub", *self, *other)),
            None => return Err(MoneyError::Underflow("sub", *self, *other)),
        };

        Ok(())
    }
}

/// Renders to cents, rounding half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };

        let abs = self.0.unsigned_abs();
        let cents = (abs + 50) / 100;

        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}
