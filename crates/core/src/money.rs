//! Exact currency amounts.
//!
//! Amounts are held as integer hundredths of a currency unit so that a
//! payment of `120.50` can never drift through floating-point rounding.

use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::Error;

const CENTS_PER_UNIT: i64 = 100;

/// A signed amount of money in hundredths of a currency unit.
///
/// Signed so that user-entered payments such as `-5` can be represented and
/// then rejected by [`crate::record::StudentRecord::pay_tuition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Builds an amount from whole currency units, saturating on overflow.
    #[must_use]
    pub fn from_units(units: u64) -> Self {
        let units = i64::try_from(units).unwrap_or(i64::MAX);
        Self(units.saturating_mul(CENTS_PER_UNIT))
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Display for Money {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let units = magnitude / CENTS_PER_UNIT.unsigned_abs();
        let cents = magnitude % CENTS_PER_UNIT.unsigned_abs();

        if cents == 0 {
            write!(formatter, "{sign}{units}")
        } else {
            write!(formatter, "{sign}{units}.{cents:02}")
        }
    }
}

impl FromStr for Money {
    type Err = Error;

    /// Parses `500`, `-5`, `+12.5` or `120.50`.
    ///
    /// Surrounding whitespace is ignored. At most two fractional digits are
    /// accepted; exponents, separators and anything else are rejected.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedAmount(input.to_string());
        let text = input.trim();

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if (whole.is_empty() && fraction.is_empty()) || fraction.len() > 2 {
            return Err(malformed());
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| malformed())?
        };
        let fraction_value: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| malformed())? * 10,
            _ => fraction.parse().map_err(|_| malformed())?,
        };

        let cents = whole_value
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(fraction_value))
            .ok_or_else(malformed)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_amount() {
        let amount: Money = "500".parse().unwrap();
        assert_eq!(amount, Money::from_units(500));
    }

    #[test]
    fn test_parse_fractional_amounts() {
        assert_eq!("120.50".parse::<Money>().unwrap().cents(), 12050);
        assert_eq!("12.5".parse::<Money>().unwrap().cents(), 1250);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("3.".parse::<Money>().unwrap().cents(), 300);
    }

    #[test]
    fn test_parse_signed_amounts() {
        assert_eq!("-5".parse::<Money>().unwrap().cents(), -500);
        assert_eq!("+5".parse::<Money>().unwrap().cents(), 500);
        assert_eq!("0".parse::<Money>().unwrap(), Money::ZERO);
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(" 100 \n".parse::<Money>().unwrap(), Money::from_units(100));
    }

    #[test]
    fn test_parse_rejects_malformed_amounts() {
        for input in ["", " ", "abc", "1.234", "1e3", "1,000", "--5", ".", "5 0", "NaN"] {
            let result = input.parse::<Money>();
            assert!(
                matches!(result, Err(Error::MalformedAmount(_))),
                "expected `{input}` to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(500).to_string(), "500");
        assert_eq!(Money::from_cents(12050).to_string(), "120.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
        assert_eq!(Money::ZERO.to_string(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let mut balance = Money::ZERO;
        balance += Money::from_units(500);
        balance -= Money::from_cents(12050);
        assert_eq!(balance.cents(), 37950);
        assert!(balance.is_positive());
        assert!(!Money::ZERO.is_positive());
    }
}
