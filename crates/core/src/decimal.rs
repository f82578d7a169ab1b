//! Fixed-point decimal with two fraction digits.
//!
//! Prices and weights are stored as scaled integers (`12.50` is `1250`), so
//! arithmetic and comparisons are exact and any SQL engine can hold them in
//! an integer column. On the wire a value is a string such as `"12.50"`;
//! JSON numbers are accepted on input as long as they carry at most two
//! fraction digits.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reasons a string cannot be read as a [`Decimal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    #[error("'{0}' is not a decimal number")]
    Malformed(String),

    #[error("'{0}' has more than two decimal places")]
    TooPrecise(String),

    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

/// A signed decimal with exactly two fraction digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal {
    scaled: i64,
}

impl Decimal {
    /// Number of fraction digits.
    pub const SCALE: u32 = 2;

    const FACTOR: i64 = 100;

    pub const ZERO: Decimal = Decimal { scaled: 0 };

    /// Build from the scaled integer representation (`1250` is `12.50`).
    pub const fn from_scaled(scaled: i64) -> Self {
        Self { scaled }
    }

    /// The scaled integer representation, as persisted.
    pub const fn scaled(self) -> i64 {
        self.scaled
    }

    pub fn is_negative(self) -> bool {
        self.scaled < 0
    }

    /// Digits before the decimal point plus the fixed fraction digits.
    ///
    /// A zero integer part contributes no digits, so `0.50` has two.
    pub fn total_digits(self) -> u32 {
        let whole = (self.scaled / Self::FACTOR).unsigned_abs();
        let whole_digits = if whole == 0 { 0 } else { whole.ilog10() + 1 };
        whole_digits + Self::SCALE
    }
}

impl From<i64> for Decimal {
    fn from(scaled: i64) -> Self {
        Self::from_scaled(scaled)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(DecimalError::Malformed(s.to_string()));
        }
        if unsigned.ends_with('.') {
            return Err(DecimalError::Malformed(s.to_string()));
        }
        if fraction.len() > Self::SCALE as usize {
            return Err(DecimalError::TooPrecise(s.to_string()));
        }

        let out_of_range = || DecimalError::OutOfRange(s.to_string());
        let whole: i64 = whole.parse().map_err(|_| out_of_range())?;
        let fraction: i64 = if fraction.is_empty() {
            0
        } else {
            let padded = format!("{fraction:0<2}");
            padded.parse().map_err(|_| out_of_range())?
        };

        let magnitude = whole
            .checked_mul(Self::FACTOR)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            scaled: if negative { -magnitude } else { magnitude },
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.scaled < 0 { "-" } else { "" };
        let abs = self.scaled.unsigned_abs();
        let factor = Self::FACTOR as u64;
        write!(f, "{sign}{}.{:02}", abs / factor, abs % factor)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number with at most two decimal places")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        v.checked_mul(Decimal::FACTOR)
            .map(Decimal::from_scaled)
            .ok_or_else(|| E::custom(DecimalError::OutOfRange(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        i64::try_from(v)
            .map_err(|_| E::custom(DecimalError::OutOfRange(v.to_string())))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        if !v.is_finite() {
            return Err(E::custom(DecimalError::Malformed(v.to_string())));
        }
        v.to_string().parse().map_err(E::custom)
    }
}
