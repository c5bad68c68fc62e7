// ============================================================================
// Money Formatter
// Thousands-grouped fixed-decimal amounts
// ============================================================================

use crate::numeric::render::{number_to_string, round_significant, NOISE_PRECISION};
use crate::numeric::NumericInput;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported number of decimals.
const MAX_DECIMALS: u32 = 20;

/// Separator and precision settings for [`money_format`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyFormat {
    /// Digits after the decimal point
    pub decimals: u32,

    /// Decimal point symbol
    pub decimal_point: String,

    /// Thousands separator
    pub thousands_sep: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            decimal_point: ".".to_string(),
            thousands_sep: ",".to_string(),
        }
    }
}

impl MoneyFormat {
    /// Two decimals, `.` and `,`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the number of decimals
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Builder method: Set the decimal point symbol
    pub fn with_decimal_point(mut self, point: impl Into<String>) -> Self {
        self.decimal_point = point.into();
        self
    }

    /// Builder method: Set the thousands separator
    pub fn with_thousands_sep(mut self, sep: impl Into<String>) -> Self {
        self.thousands_sep = sep.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.decimals > MAX_DECIMALS {
            return Err(format!("Decimals cannot exceed {}", MAX_DECIMALS));
        }

        if self.decimal_point.is_empty() {
            return Err("Decimal point cannot be empty".to_string());
        }

        if self.decimal_point == self.thousands_sep {
            return Err("Decimal point and thousands separator must differ".to_string());
        }

        Ok(())
    }
}

/// Format an amount with grouped thousands and a fixed number of decimals.
///
/// Characters other than digits, signs, `e`/`E` and `.` are stripped first;
/// anything that still is not a finite number formats as zero. With
/// decimals the amount is rounded up, otherwise to the nearest integer.
///
/// ```
/// use decimal_display::format::{money_format, MoneyFormat};
///
/// assert_eq!(money_format(10_000_000, &MoneyFormat::new()), "10,000,000.00");
/// let dashed = MoneyFormat::new().with_decimals(3).with_thousands_sep("-");
/// assert_eq!(money_format(10_000_000, &dashed), "10-000-000.000");
/// ```
pub fn money_format(input: impl Into<NumericInput>, format: &MoneyFormat) -> String {
    let amount = sanitize(&input.into());
    let decimals = format.decimals.min(MAX_DECIMALS);

    let rounded = if decimals > 0 {
        let k = 10f64.powi(decimals as i32);
        round_significant(amount * k, NOISE_PRECISION).ceil() / k
    } else {
        (amount + 0.5).floor()
    };

    let text = number_to_string(rounded);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let grouped = group_thousands(int_part, &format.thousands_sep);
    if decimals == 0 {
        return grouped;
    }

    format!(
        "{}{}{:0<width$}",
        grouped,
        format.decimal_point,
        frac_part,
        width = decimals as usize
    )
}

fn sanitize(input: &NumericInput) -> f64 {
    let cleaned: String = input
        .canonical_text()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E' | '.'))
        .collect();

    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Insert `sep` every three digits from the right. Text that is not a plain
/// (optionally signed) digit run is returned as-is.
fn group_thousands(int_part: &str, sep: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(int_part.len() + digits.len() / 3 * sep.len());
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}
