// ============================================================================
// Numeric Errors
// Error types for operand parsing and display formatting
// ============================================================================

use std::fmt;

/// Errors that can occur while reading operands or formatting values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string could not be read as a number
    InvalidInput(String),
    /// Operator symbol is not one of `+ - * /`
    InvalidOperator(String),
    /// Exponent part of an exponential literal is malformed
    InvalidExponent(String),
    /// Case conversion mode is not one of 1, 2, 3
    InvalidCaseMode(u8),
    /// Timestamp is outside the representable date range
    InvalidTimestamp(i64),
    /// Date pattern contains an unknown specifier
    InvalidPattern(String),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput(input) => {
                write!(f, "invalid input: could not parse {:?} as a number", input)
            },
            NumericError::InvalidOperator(op) => {
                write!(f, "invalid operator: expected one of + - * /, got {:?}", op)
            },
            NumericError::InvalidExponent(input) => {
                write!(f, "invalid exponent in {:?}", input)
            },
            NumericError::InvalidCaseMode(mode) => {
                write!(f, "invalid case mode: expected 1, 2 or 3, got {}", mode)
            },
            NumericError::InvalidTimestamp(ts) => {
                write!(f, "invalid timestamp: {} is out of range", ts)
            },
            NumericError::InvalidPattern(pattern) => {
                write!(f, "invalid date pattern {:?}", pattern)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
