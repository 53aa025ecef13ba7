//! Fixed-point currency amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An amount in cents.
///
/// On the wire it is a decimal string with two places (`"1250.00"`), the
/// format the invoice screens expect. It can be read back from that string
/// or from a plain JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid amount: {0:?}")]
pub struct MoneyParseError(String);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Plain decimal form, e.g. `1250.00`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }

    /// Display form with thousands separators, e.g. `1,250.00`.
    ///
    /// ```
    /// use logistix_core::portal::Money;
    ///
    /// assert_eq!(Money::from_cents(125_000).formatted(), "1,250.00");
    /// assert_eq!(Money::from_cents(-99).formatted(), "-0.99");
    /// ```
    pub fn formatted(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = (abs / 100).to_string();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        format!("{sign}{grouped}.{:02}", abs % 100)
    }

    fn from_f64(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if cents.is_finite() && cents.abs() < i64::MAX as f64 {
            Some(Self(cents as i64))
        } else {
            None
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Accepts an optional sign, digits with optional `,` thousands grouping,
    /// and at most two decimal places.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoneyParseError(s.to_string());
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if !is_grouped_correctly(whole) {
            return Err(err());
        }
        let whole: String = whole.chars().filter(|c| *c != ',').collect();
        if whole.is_empty()
            || !whole.chars().all(|c| c.is_ascii_digit())
            || frac.len() > 2
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(err());
        }

        let whole: i64 = whole.parse().map_err(|_| err())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| err())? * 10,
            _ => frac.parse().map_err(|_| err())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(err)?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

/// Either no commas at all, or a leading group of 1-3 characters followed
/// by groups of exactly three.
fn is_grouped_correctly(whole: &str) -> bool {
    if !whole.contains(',') {
        return true;
    }
    let mut groups = whole.split(',');
    groups
        .next()
        .is_some_and(|first| (1..=3).contains(&first.len()))
        && groups.all(|group| group.len() == 3)
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .map_err(|_| E::custom("amount out of range"))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_f64(v).ok_or_else(|| E::custom("amount out of range"))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_two_place_string() {
        assert_eq!(
            serde_json::to_string(&Money::from_cents(125_000)).unwrap(),
            r#""1250.00""#
        );
        assert_eq!(
            serde_json::to_string(&Money::from_cents(5)).unwrap(),
            r#""0.05""#
        );
    }

    #[test]
    fn test_deserializes_from_string_and_number() {
        let from_str: Money = serde_json::from_str(r#""1,250.5""#).unwrap();
        let from_int: Money = serde_json::from_str("1250").unwrap();
        let from_float: Money = serde_json::from_str("1250.5").unwrap();

        assert_eq!(from_str, Money::from_cents(125_050));
        assert_eq!(from_int, Money::from_cents(125_000));
        assert_eq!(from_float, Money::from_cents(125_050));
    }

    #[test]
    fn test_rejects_malformed_amounts() {
        for input in ["", "abc", "1.234", "1.2.3", "--5", "1e3"] {
            assert!(input.parse::<Money>().is_err(), "{input:?} should fail");
        }
    }

    #[test]
    fn test_comma_grouping_is_checked() {
        assert_eq!(
            "1,234,567.89".parse::<Money>().unwrap(),
            Money::from_cents(123_456_789)
        );
        assert_eq!("12,345".parse::<Money>().unwrap(), Money::from_cents(1_234_500));
        for input in ["1,2,3", "1234,567", ",123", "1,", "12,34.00", "1,,234"] {
            assert!(input.parse::<Money>().is_err(), "{input:?} should fail");
        }
    }

    #[test]
    fn test_formatted_grouping() {
        assert_eq!(Money::ZERO.formatted(), "0.00");
        assert_eq!(Money::from_cents(99_999).formatted(), "999.99");
        assert_eq!(Money::from_cents(123_456_789).formatted(), "1,234,567.89");
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 5]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total, Money::from_cents(355));
    }
}
