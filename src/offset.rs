//! The offset parameter: a validated, non-negative, finite distance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OffsetError;

/// Distance between a container edge and its content's bounding box.
///
/// Construction goes through validation, so an `Offset` in hand is always
/// finite and `>= 0`. Fractional values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Offset(f64);

impl Offset {
    pub const ZERO: Offset = Offset(0.0);

    pub fn new(value: f64) -> Result<Self, OffsetError> {
        if value.is_nan() {
            return Err(OffsetError::NotANumber(value.to_string()));
        }
        if value.is_infinite() {
            return Err(OffsetError::NotFinite);
        }
        if value < 0.0 {
            return Err(OffsetError::Negative(value));
        }
        // Adding zero folds -0.0 into 0.0.
        Ok(Offset(value + 0.0))
    }

    /// Parse user input from the quick-action box.
    ///
    /// Reads the leading decimal number and ignores whatever follows it, so
    /// a unit suffix like `"16px"` reads as 16. Input with no leading number
    /// is rejected.
    pub fn parse(input: &str) -> Result<Self, OffsetError> {
        let trimmed = input.trim();
        let value: f64 = numeric_prefix(trimmed)
            .parse()
            .map_err(|_| OffsetError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Longest prefix of the form `[+-]digits[.digits]`. Empty when there are
/// no digits.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }

    if whole + fraction == 0 {
        return "";
    }
    &s[..end]
}

impl FromStr for Offset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Offset {
    type Error = OffsetError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Offset> for f64 {
    fn from(offset: Offset) -> f64 {
        offset.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
