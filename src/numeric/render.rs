// ============================================================================
// Number Rendering
// Canonical number text, significant-digit rounding and fixed-point output
// ============================================================================
//
// The canonical text matches what a browser prints for a number: shortest
// round-trip digits, plain notation between 1e-7 and 1e21, exponential
// (`1.5e-7`, `1e+21`) outside that range.

use rust_decimal::{Decimal, RoundingStrategy};

/// Significant digits kept by [`round_significant`] when cancelling
/// binary representation noise.
pub const NOISE_PRECISION: usize = 15;

/// Magnitude at and above which fixed-point output falls back to the
/// canonical (exponential) text.
const FIXED_LIMIT: f64 = 1e21;

/// Most significant digits an f64 can meaningfully carry.
const MAX_SIGNIFICANT: usize = 17;

/// Fraction digits that always reach the end of an f64's exact decimal
/// expansion, so `{:.*e}` with this precision never rounds.
const EXACT_DIGITS: usize = 767;

/// Render `x` the way a browser's `Number#toString` does.
///
/// # Examples
/// - `0.3` -> `"0.3"`
/// - `0.00000015` -> `"1.5e-7"`
/// - `1e21` -> `"1e+21"`
/// - `-0.0` -> `"0"`
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x < 0.0 {
        return format!("-{}", number_to_string(-x));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let sci = format!("{:e}", x);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, e.abs())
        }
    }
}

/// Plain positional rendering with shortest round-trip digits and no
/// exponent, e.g. `0.00000015` -> `"0.00000015"`.
#[inline]
pub fn plain_decimal(x: f64) -> String {
    format!("{}", x)
}

/// Round `x` to `precision` significant digits and read it back.
///
/// Used with [`NOISE_PRECISION`] to cancel artefacts such as
/// `33.33 * 10 = 333.29999999999995`. Rounds on the exact binary value and
/// picks the candidate further from zero on an exact tie
/// (`1234567890123445` -> `1234567890123450` at 15 digits). Non-finite
/// values and zero are returned untouched, as is any precision above 17.
pub fn round_significant(x: f64, precision: usize) -> f64 {
    if !x.is_finite() || x == 0.0 || precision == 0 || precision > MAX_SIGNIFICANT {
        return x;
    }

    let exact = format!("{:.*e}", EXACT_DIGITS, x.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return x;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return x;
    };

    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept = digits[..precision]
        .iter()
        .fold(0u64, |acc, d| acc * 10 + u64::from(d - b'0'));
    if digits[precision] >= b'5' {
        kept += 1;
    }

    let sign = if x < 0.0 { "-" } else { "" };
    format!("{}{}e{}", sign, kept, exponent - (precision as i32 - 1))
        .parse::<f64>()
        .unwrap_or(x)
}

/// Fixed-point rendering with `decimals` digits after the point.
///
/// Rounds on the exact binary value and picks the candidate further from
/// zero on an exact tie (`10.125` -> `"10.13"`). Non-finite values and
/// magnitudes of 1e21 or more use [`number_to_string`].
pub fn to_fixed(x: f64, decimals: u32) -> String {
    if !x.is_finite() || x.abs() >= FIXED_LIMIT {
        return number_to_string(x);
    }

    let Some(exact) = Decimal::from_f64_retain(x) else {
        return format!("{:.*}", decimals as usize, x);
    };
    let rounded = exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);

    let text = rounded.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    // A negative value that rounds to zero keeps its sign, as `-0.00`
    let int_part = if int_part == "0" && x < 0.0 && !rounded.is_sign_negative() {
        "-0"
    } else {
        int_part
    };

    if decimals == 0 {
        int_part.to_string()
    } else {
        format!(
            "{}.{:0<width$}",
            int_part,
            frac_part,
            width = decimals as usize
        )
    }
}

/// Count the digits after the decimal point in `text`, stopping at an
/// exponent marker. Zero when there is no point.
pub fn decimal_digits(text: &str) -> usize {
    text.split_once('.')
        .map(|(_, frac)| frac.chars().take_while(char::is_ascii_digit).count())
        .unwrap_or(0)
}
