// ============================================================================
// Decimal-Safe Arithmetic
// Scale-to-integer arithmetic that removes binary fraction noise
// ============================================================================

use super::errors::NumericError;
use super::operand::NumericInput;
use super::render::{decimal_digits, round_significant, NOISE_PRECISION};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four basic arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Symbol of the operator.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(NumericError::InvalidOperator(other.to_string())),
        }
    }
}

/// Result of a decimal-safe operation, ready to be chained.
///
/// ```
/// use decimal_display::numeric::{compute, Operator};
///
/// let res = compute(1.3, Operator::Sub, 1.2)
///     .next(Operator::Add, 1.5)
///     .next(Operator::Mul, 2.3)
///     .next(Operator::Div, 0.2)
///     .result();
/// assert_eq!(res, 18.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Computation {
    result: f64,
}

impl Computation {
    /// The computed value.
    #[inline]
    pub const fn result(self) -> f64 {
        self.result
    }

    /// Continue with the previous result as the left operand.
    #[inline]
    #[must_use]
    pub fn next(self, op: Operator, operand: impl Into<NumericInput>) -> Computation {
        compute(self.result, op, operand)
    }
}

impl From<Computation> for f64 {
    #[inline]
    fn from(c: Computation) -> Self {
        c.result
    }
}

/// Apply `op` to `a` and `b` without binary fraction artefacts.
///
/// Both operands are scaled by `10^max(decimals(a), decimals(b))`, snapped
/// to 15 significant digits, combined as integers and scaled back, so
/// `0.1 + 0.2` yields exactly `0.3`. Division by zero follows IEEE-754.
/// Text operands that are not numbers read as `NaN`.
pub fn compute(
    a: impl Into<NumericInput>,
    op: Operator,
    b: impl Into<NumericInput>,
) -> Computation {
    let a = a.into();
    let b = b.into();

    let places = decimal_digits(&a.canonical_text()).max(decimal_digits(&b.canonical_text()));
    let power = 10f64.powi(places as i32);

    let a = round_significant(a.value_or_nan() * power, NOISE_PRECISION);
    let b = round_significant(b.value_or_nan() * power, NOISE_PRECISION);

    let raw = match op {
        Operator::Add => (a + b) / power,
        Operator::Sub => (a - b) / power,
        Operator::Mul => (a * b) / (power * power),
        Operator::Div => a / b,
    };

    Computation {
        result: round_significant(raw, NOISE_PRECISION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_operator_from_str() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!(" / ".parse::<Operator>(), Ok(Operator::Div));
        assert_eq!(
            "%".parse::<Operator>(),
            Err(NumericError::InvalidOperator("%".to_string()))
        );
        assert_eq!(Operator::Mul.to_string(), "*");
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(compute(0.1, Operator::Add, 0.2).result(), 0.3);
        assert_eq!(compute(0.3, Operator::Sub, 0.1).result(), 0.2);
        assert_eq!(compute(0.1, Operator::Mul, 0.2).result(), 0.02);
        assert_eq!(compute(0.3, Operator::Div, 0.1).result(), 3.0);
        assert_eq!(compute(33.33, Operator::Mul, 10).result(), 333.3);
    }

    #[test]
    fn test_chaining() {
        let res = compute(1.3, Operator::Sub, 1.2)
            .next(Operator::Add, 1.5)
            .next(Operator::Mul, 2.3)
            .next(Operator::Div, 0.2)
            .result();
        assert_eq!(res, 18.4);
    }

    #[test]
    fn test_chain_steps_are_independent() {
        let base = compute(1.1, Operator::Add, 2.2);
        let doubled = base.next(Operator::Mul, 2);
        let halved = base.next(Operator::Div, 2);
        assert_eq!(base.result(), 3.3);
        assert_eq!(doubled.result(), 6.6);
        assert_eq!(halved.result(), 1.65);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(compute(10, Operator::Div, 0).result(), f64::INFINITY);
        assert_eq!(compute(-10, Operator::Div, 0).result(), f64::NEG_INFINITY);
        assert!(compute(0, Operator::Div, 0).result().is_nan());
    }

    #[test]
    fn test_text_operands() {
        assert_eq!(compute("0.10", Operator::Add, "0.20").result(), 0.3);
        assert_eq!(compute("1.5", Operator::Mul, 2).result(), 3.0);
        assert!(compute("abc", Operator::Add, 1).result().is_nan());
    }

    #[test]
    fn test_sixteen_digit_tie_rounds_up() {
        assert_eq!(
            compute(1234567890123445u64, Operator::Add, 0).result(),
            1234567890123450.0
        );
        assert_eq!(
            compute(123456789012344.5, Operator::Add, 0).result(),
            123456789012345.0
        );
    }

    #[test]
    fn test_into_f64() {
        let value: f64 = compute(2, Operator::Add, 3).into();
        assert_eq!(value, 5.0);
    }

    fn exact(mantissa: i64, scale: u32) -> (f64, Decimal) {
        let d = Decimal::new(mantissa, scale);
        let f = d.to_string().parse::<f64>().unwrap();
        (f, d)
    }

    proptest! {
        #[test]
        fn prop_sum_matches_exact_decimal(
            x in -100_000_000i64..100_000_000,
            sx in 0u32..=6,
            y in -100_000_000i64..100_000_000,
            sy in 0u32..=6,
        ) {
            let (a, da) = exact(x, sx);
            let (b, db) = exact(y, sy);
            let expected = (da + db).to_string().parse::<f64>().unwrap();
            prop_assert_eq!(compute(a, Operator::Add, b).result(), expected);
        }

        #[test]
        fn prop_difference_matches_exact_decimal(
            x in -100_000_000i64..100_000_000,
            sx in 0u32..=6,
            y in -100_000_000i64..100_000_000,
            sy in 0u32..=6,
        ) {
            let (a, da) = exact(x, sx);
            let (b, db) = exact(y, sy);
            let expected = (da - db).to_string().parse::<f64>().unwrap();
            prop_assert_eq!(compute(a, Operator::Sub, b).result(), expected);
        }

        #[test]
        fn prop_chaining_equals_recomputation(
            x in -1_000_000i64..1_000_000,
            y in -1_000_000i64..1_000_000,
            z in -1_000i64..1_000,
            s in 0u32..=4,
        ) {
            let (a, _) = exact(x, s);
            let (b, _) = exact(y, s);
            let (c, _) = exact(z, 2);
            let chained = compute(a, Operator::Add, b).next(Operator::Mul, c).result();
            let step = compute(a, Operator::Add, b).result();
            let recomputed = compute(step, Operator::Mul, c).result();
            prop_assert_eq!(chained.to_bits(), recomputed.to_bits());
        }
    }
}
