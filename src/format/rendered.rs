// ============================================================================
// Rendered Output
// What a display formatter hands back to the caller
// ============================================================================

use crate::numeric::NumericInput;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output of [`parse_price`](super::parse_price) and
/// [`parse_with_unit`](super::parse_with_unit).
///
/// Some branches return the caller's input untouched and the unit formatter
/// returns a bare numeric zero, so the output is not always a string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rendered {
    /// Formatted display text
    Text(String),
    /// The input, returned as-is
    Unchanged(NumericInput),
    /// Numeric zero
    Zero,
}

impl Rendered {
    /// The formatted text, if this is a [`Rendered::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether this is the numeric zero sentinel.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Rendered::Zero)
    }

    /// JSON value as a front-end expects it: a string for formatted text,
    /// the original number or string for unchanged input, `0` for zero.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Rendered::Text(s) => Value::String(s.clone()),
            Rendered::Unchanged(NumericInput::Number(n)) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Rendered::Unchanged(NumericInput::Text(s)) => Value::String(s.clone()),
            Rendered::Zero => Value::from(0),
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Text(s) => f.write_str(s),
            Rendered::Unchanged(input) => write!(f, "{}", input),
            Rendered::Zero => f.write_str("0"),
        }
    }
}

impl From<&str> for Rendered {
    #[inline]
    fn from(value: &str) -> Self {
        Rendered::Text(value.to_string())
    }
}

impl From<String> for Rendered {
    #[inline]
    fn from(value: String) -> Self {
        Rendered::Text(value)
    }
}
