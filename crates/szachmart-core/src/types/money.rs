//! Exact money arithmetic in integer minor units.
//!
//! Prices are carried as grosz (1/100 zł) in an `i64`. Summing a cart must
//! never lose cents, so the money path stays off binary floating point
//! entirely; the only lossy conversion is at the deserialization boundary,
//! where a backend JSON number is rounded to the nearest grosz once.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// An amount of money in integer minor units (grosz).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from minor units.
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates an amount from major and minor parts, e.g. `(12, 34)` → 12.34.
    pub const fn from_major_minor(major: i64, minor: u8) -> Self {
        Self(major * 100 + minor as i64)
    }

    /// Returns the amount in minor units.
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked multiplication by a quantity.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(quantity as i64).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = AppError;

    /// Parses a decimal string such as `"123.45"`, `"7"`, or `"-0.50"`.
    ///
    /// At most two fraction digits are accepted; a single fraction digit
    /// means tenths (`"1.5"` → 1.50).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((m, f)) => (m, f),
            None => (digits, ""),
        };

        // The fraction must be bare digits; i64 parsing alone would let a
        // second sign slip through ("1.-5")
        if major_str.is_empty()
            || minor_str.len() > 2
            || !minor_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(AppError::validation(format!("Invalid money amount: '{s}'")));
        }

        let major: i64 = major_str
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid money amount: '{s}'")))?;

        let minor: i64 = if minor_str.is_empty() {
            0
        } else {
            let parsed: i64 = minor_str
                .parse()
                .map_err(|_| AppError::validation(format!("Invalid money amount: '{s}'")))?;
            // Scale one fraction digit to tenths
            if minor_str.len() == 1 { parsed * 10 } else { parsed }
        };

        let total = major
            .checked_mul(100)
            .and_then(|m| m.checked_add(minor))
            .ok_or_else(|| AppError::validation(format!("Money amount out of range: '{s}'")))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    /// Accepts both JSON shapes the backend emits: a decimal string
    /// (`"149.99"`) or a bare number (`149.99`).
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl de::Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal money string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                v.parse().map_err(|e: AppError| E::custom(e.message))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Ok(Money((v * 100.0).round() as i64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money::from_major_minor(v, 0))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                Ok(Money::from_major_minor(v as i64, 0))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major_minor(12, 34).to_string(), "12.34");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!("123.45".parse::<Money>().unwrap(), Money::from_minor(12345));
        assert_eq!("7".parse::<Money>().unwrap(), Money::from_minor(700));
        assert_eq!("1.5".parse::<Money>().unwrap(), Money::from_minor(150));
        assert_eq!("-0.50".parse::<Money>().unwrap(), Money::from_minor(-50));
        assert!("12.345".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        // A sign is only valid at the front, never inside the fraction
        assert!("1.-5".parse::<Money>().is_err());
        assert!("1.+5".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major_minor(10, 0);
        let b = Money::from_major_minor(5, 50);
        assert_eq!(
            a.checked_mul(2).and_then(|x| x.checked_add(b)).unwrap(),
            Money::from_minor(2550)
        );
    }

    #[test]
    fn test_serde_both_shapes() {
        let from_string: Money = serde_json::from_str("\"149.99\"").unwrap();
        let from_number: Money = serde_json::from_str("149.99").unwrap();
        let from_integer: Money = serde_json::from_str("149").unwrap();
        assert_eq!(from_string, Money::from_minor(14999));
        assert_eq!(from_number, Money::from_minor(14999));
        assert_eq!(from_integer, Money::from_minor(14900));

        assert_eq!(
            serde_json::to_string(&Money::from_minor(14999)).unwrap(),
            "\"149.99\""
        );
    }
}
