// ============================================================================
// Price Formatter
// Adaptive significant-digit rendering for token prices
// ============================================================================
//
// Token prices span many orders of magnitude, so a fixed number of decimals
// either wastes space or hides every significant digit. Rules, in order:
//
// | Input                     | Output                              |
// |---------------------------|-------------------------------------|
// | exponent `e+N`            | input unchanged                     |
// | exponent `e-N`            | `0.0{N-1}ddd`                       |
// | v >= 10                   | 2 decimals                          |
// | 1 <= v < 10               | 3 decimals                          |
// | 0.0001 <= v < 1           | up to the 3rd significant digit     |
// | 0 < v < 0.0001            | `0.0{zeros}ddd`                     |
// | otherwise                 | input unchanged                     |

use super::rendered::Rendered;
use super::window::{zero_run, DigitWindow, SIGNIFICANT_DIGITS};
use crate::numeric::render::to_fixed;
use crate::numeric::{NumericError, NumericInput, NumericResult};

/// Smallest value still rendered in plain decimal notation.
const PLAIN_FLOOR: f64 = 0.0001;

/// Format a token price for display.
///
/// Returns `None` when the value cannot be formatted; the cause is logged.
///
/// # Examples
/// ```
/// use decimal_display::format::{parse_price, Rendered};
///
/// assert_eq!(parse_price(12345.6789), Some(Rendered::from("12345.68")));
/// assert_eq!(parse_price(0.00000000123), Some(Rendered::from("0.0{8}123")));
/// ```
pub fn parse_price(value: impl Into<NumericInput>) -> Option<Rendered> {
    let value = value.into();
    match render_price(&value) {
        Ok(rendered) => rendered,
        Err(err) => {
            tracing::warn!(input = %value, error = %err, "price formatting failed");
            None
        },
    }
}

fn render_price(value: &NumericInput) -> NumericResult<Option<Rendered>> {
    let v = value.to_f64()?;
    let text = value.canonical_text();
    let text = text.trim();

    if let Some(idx) = text.find(['e', 'E']) {
        if !text[idx + 1..].starts_with('-') {
            return Ok(Some(Rendered::Unchanged(value.clone())));
        }
        return exponential_shorthand(text, idx).map(|s| Some(Rendered::Text(s)));
    }

    let rendered = if v >= 10.0 {
        Rendered::Text(to_fixed(v, 2))
    } else if v >= 1.0 {
        Rendered::Text(to_fixed(v, 3))
    } else if v > 0.0 {
        let Some(window) = DigitWindow::locate(text) else {
            return Ok(None);
        };
        if v >= PLAIN_FLOOR {
            Rendered::Text(window.plain())
        } else {
            Rendered::Text(window.shorthand())
        }
    } else {
        Rendered::Unchanged(value.clone())
    };

    Ok(Some(rendered))
}

/// `1.2345e-9` -> `0.0{8}123`. `idx` is the position of the exponent marker.
fn exponential_shorthand(text: &str, idx: usize) -> NumericResult<String> {
    let (mantissa, exponent) = (&text[..idx], &text[idx + 2..]);

    let exponent: i64 = exponent
        .parse()
        .map_err(|_| NumericError::InvalidExponent(text.to_string()))?;

    let digits: String = mantissa
        .chars()
        .filter(char::is_ascii_digit)
        .take(SIGNIFICANT_DIGITS)
        .collect();
    if digits.is_empty() {
        return Err(NumericError::InvalidInput(text.to_string()));
    }

    let sign = if mantissa.trim_start().starts_with('-') {
        "-"
    } else {
        ""
    };
    Ok(format!("{}{}", sign, zero_run(exponent - 1, &digits)))
}
