//! Currency amounts rounded to whole cents.

use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// A signed currency amount with cent precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Build an amount from a number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Multiply by a whole number of units, saturating on overflow.
    pub fn times(self, units: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(units)))
    }

    /// Parse the leading decimal number of `input`, rounding to the nearest cent.
    ///
    /// Leading whitespace and an optional sign are accepted; anything after the
    /// numeric prefix is ignored. Input without a numeric prefix yields zero.
    pub fn parse_lenient(input: &str) -> Self {
        let text = input.trim_start();
        let (sign, rest) = match text.as_bytes().first() {
            Some(b'-') => ("-", &text[1..]),
            Some(b'+') => ("", &text[1..]),
            _ => ("", text),
        };

        let whole_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let whole = &rest[..whole_len];
        let fraction = rest[whole_len..]
            .strip_prefix('.')
            .map(|tail| {
                let len = tail.bytes().take_while(u8::is_ascii_digit).count();
                &tail[..len]
            })
            .unwrap_or_default();
        if whole.is_empty() && fraction.is_empty() {
            return Self::ZERO;
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let literal = if fraction.is_empty() {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{fraction}")
        };
        match Decimal::from_str(&literal) {
            Ok(value) => Self(
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            ),
            Err(err) => {
                tracing::debug!("amount {literal:?} out of range: {err}");
                Self::ZERO
            }
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:.2}", self.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_decimal_amounts() {
        assert_eq!(Money::parse_lenient("250.00"), Money::from_cents(25_000));
        assert_eq!(Money::parse_lenient("  12.5"), Money::from_cents(1_250));
        assert_eq!(Money::parse_lenient("-3.07"), Money::from_cents(-307));
        assert_eq!(Money::parse_lenient("7"), Money::from_cents(700));
        assert_eq!(Money::parse_lenient(".99"), Money::from_cents(99));
        assert_eq!(Money::parse_lenient("8."), Money::from_cents(800));
    }

    #[test]
    fn rounds_extra_precision_to_nearest_cent() {
        assert_eq!(Money::parse_lenient("1.005"), Money::from_cents(101));
        assert_eq!(Money::parse_lenient("1.004"), Money::from_cents(100));
        assert_eq!(Money::parse_lenient("0.999"), Money::from_cents(100));
        assert_eq!(Money::parse_lenient("-2.345"), Money::from_cents(-235));
    }

    #[test]
    fn malformed_input_degrades_to_prefix_or_zero() {
        assert_eq!(Money::parse_lenient("abc"), Money::ZERO);
        assert_eq!(Money::parse_lenient(""), Money::ZERO);
        assert_eq!(Money::parse_lenient("-"), Money::ZERO);
        assert_eq!(Money::parse_lenient("42x"), Money::from_cents(4_200));
        assert_eq!(Money::parse_lenient("9.5,extra"), Money::from_cents(950));
    }

    #[test]
    fn display_uses_two_decimals_and_honours_width() {
        assert_eq!(Money::from_cents(50_000).to_string(), "500.00");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::parse_lenient("7").to_string(), "7.00");
        assert_eq!(format!("{:>7}", Money::from_cents(1_234)), "  12.34");
        assert_eq!(format!("{:>7}", Money::ZERO), "   0.00");
    }

    #[test]
    fn arithmetic_stays_exact_to_the_cent() {
        let mut balance = Money::from_cents(1_120).times(15);
        assert_eq!(balance, Money::from_cents(16_800));
        balance -= Money::parse_lenient("0.10");
        balance += Money::parse_lenient("0.20");
        assert_eq!(balance, Money::from_cents(16_810));
        assert_eq!(Money::from_cents(1_250).times(0), Money::ZERO);
    }
}
