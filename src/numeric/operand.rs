// ============================================================================
// Numeric Input
// A number or numeric-looking string supplied by the caller
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::render::number_to_string;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value handed to the formatters or to [`compute`](super::compute).
///
/// Front-end payloads carry prices both as JSON numbers and as strings, so
/// both are accepted. Strings keep their own spelling as canonical text
/// (`"0.10"` has two decimals), numbers use [`number_to_string`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NumericInput {
    /// A plain IEEE-754 double
    Number(f64),
    /// A numeric string such as `"0.0001"` or `"1.5e-7"`
    Text(String),
}

impl NumericInput {
    /// Canonical textual form of the input.
    pub fn canonical_text(&self) -> Cow<'_, str> {
        match self {
            NumericInput::Number(n) => Cow::Owned(number_to_string(*n)),
            NumericInput::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Numeric value of the input.
    ///
    /// Surrounding whitespace is ignored and an empty string reads as zero.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the text is not a number.
    pub fn to_f64(&self) -> NumericResult<f64> {
        match self {
            NumericInput::Number(n) => Ok(*n),
            NumericInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0.0);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| NumericError::InvalidInput(s.clone()))
            },
        }
    }

    /// Numeric value, with unreadable text coerced to `NaN`.
    #[inline]
    pub fn value_or_nan(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

impl From<f64> for NumericInput {
    #[inline]
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<i32> for NumericInput {
    #[inline]
    fn from(value: i32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<i64> for NumericInput {
    #[inline]
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<u64> for NumericInput {
    #[inline]
    fn from(value: u64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<&str> for NumericInput {
    #[inline]
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    #[inline]
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_text() {
        assert_eq!(NumericInput::from(0.1).canonical_text(), "0.1");
        assert_eq!(NumericInput::from(1e-7).canonical_text(), "1e-7");
        assert_eq!(NumericInput::from("0.10").canonical_text(), "0.10");
        assert_eq!(NumericInput::from(42).canonical_text(), "42");
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(NumericInput::from(" 12.5 ").to_f64(), Ok(12.5));
        assert_eq!(NumericInput::from("").to_f64(), Ok(0.0));
        assert_eq!(NumericInput::from("1.5e-7").to_f64(), Ok(1.5e-7));
        assert_eq!(
            NumericInput::from("abc").to_f64(),
            Err(NumericError::InvalidInput("abc".to_string()))
        );
    }

    #[test]
    fn test_value_or_nan() {
        assert!(NumericInput::from("not a number").value_or_nan().is_nan());
        assert_eq!(NumericInput::from(3.25).value_or_nan(), 3.25);
    }

    #[test]
    fn test_display() {
        assert_eq!(NumericInput::from(1e21).to_string(), "1e+21");
        assert_eq!(NumericInput::from("007").to_string(), "007");
    }
}
