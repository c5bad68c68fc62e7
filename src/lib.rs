// ============================================================================
// Decimal Display Library
// Precision-safe arithmetic and display formatting for trading front-ends
// ============================================================================

//! # Decimal Display
//!
//! Helpers for showing numbers to people: arithmetic that does not leak
//! binary fraction noise, and formatters for prices and large figures.
//!
//! ## Features
//!
//! - **Decimal-safe arithmetic** with chainable steps (`0.1 + 0.2 == 0.3`)
//! - **Adaptive price formatting** that keeps three significant digits of
//!   tiny token prices, using the `0.0{N}ddd` zero-run shorthand
//! - **Magnitude suffixes** (K/M/B/T) for volumes and TVL
//! - **Money, relative time and text helpers** for the surrounding UI
//! - **Throttle/debounce** for UI callbacks (`async` feature for debounce)
//!
//! ## Example
//!
//! ```rust
//! use decimal_display::prelude::*;
//!
//! let total = compute(0.1, Operator::Add, 0.2)
//!     .next(Operator::Mul, 3)
//!     .result();
//! assert_eq!(total, 0.9);
//!
//! assert_eq!(parse_price(0.00000000123).unwrap().to_string(), "0.0{8}123");
//! assert_eq!(
//!     parse_with_unit(2_500_000_000u64, UnitKind::Default).unwrap().to_string(),
//!     "2.5B"
//! );
//! ```

pub mod format;
pub mod numeric;
pub mod text;
pub mod timing;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::format::{
        format_time, money_format, parse_price, parse_with_unit, MoneyFormat, RelativeTime,
        Rendered, UnitKind,
    };
    pub use crate::numeric::{
        compute, Computation, NumericError, NumericInput, NumericResult, Operator,
    };
    pub use crate::text::{hide_mobile, turn_case, CaseMode};
    pub use crate::timing::Throttle;
    pub use crate::utils::{random_id, unique_by};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_price_of_computed_total() {
        // 0.1 + 0.2 would print as 0.30000000000000004 without the scaling
        let total = compute(0.1, Operator::Add, 0.2).result();
        assert_eq!(total, 0.3);
        assert_eq!(parse_price(total), Some(Rendered::from("0.3")));

        let notional = compute(total, Operator::Mul, 41.7).result();
        assert_eq!(notional, 12.51);
        assert_eq!(parse_price(notional), Some(Rendered::from("12.51")));
    }

    #[test]
    fn test_formatters_agree_on_boundaries() {
        assert_eq!(
            parse_price(-5),
            Some(Rendered::Unchanged(NumericInput::Number(-5.0)))
        );
        assert_eq!(parse_with_unit(-5, UnitKind::Default), Some(Rendered::Zero));
        assert_eq!(parse_with_unit(0.5, UnitKind::from("tvl")), Some(Rendered::Zero));
    }

    #[test]
    fn test_chained_string_operands() {
        let op: Operator = "*".parse().unwrap();
        let res = compute("19.99", Operator::Sub, "0.99")
            .next(op, "3")
            .result();
        assert_eq!(res, 57.0);
        assert_eq!(
            money_format(res * 1000.0, &MoneyFormat::new()),
            "57,000.00"
        );
    }

    #[test]
    fn test_unformattable_values_are_none() {
        assert_eq!(parse_price("n/a"), None);
        assert_eq!(parse_with_unit("n/a", UnitKind::Tvl), None);
    }
}
