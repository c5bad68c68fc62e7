// ============================================================================
// Unit Formatter
// Magnitude suffixes (K/M/B/T) for volumes and market caps
// ============================================================================

use super::rendered::Rendered;
use super::window::DigitWindow;
use crate::numeric::render::{number_to_string, plain_decimal, to_fixed};
use crate::numeric::{NumericInput, NumericResult};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What kind of figure is being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitKind {
    /// Any figure; sub-unit values keep three significant digits
    #[default]
    Default,
    /// Total value locked; sub-unit values collapse to zero
    Tvl,
}

impl From<&str> for UnitKind {
    fn from(tag: &str) -> Self {
        if tag == "tvl" {
            UnitKind::Tvl
        } else {
            UnitKind::Default
        }
    }
}

/// A magnitude band: values at or above `floor` are divided by `divisor`,
/// rounded to an integer, divided by `denominator` and suffixed.
struct Band {
    floor: f64,
    divisor: f64,
    denominator: f64,
    suffix: char,
}

const BANDS: [Band; 4] = [
    Band {
        floor: 1e12,
        divisor: 1e9,
        denominator: 1000.0,
        suffix: 'T',
    },
    Band {
        floor: 1e9,
        divisor: 1e6,
        denominator: 1000.0,
        suffix: 'B',
    },
    Band {
        floor: 1e6,
        divisor: 1e4,
        denominator: 100.0,
        suffix: 'M',
    },
    Band {
        floor: 1e4,
        divisor: 10.0,
        denominator: 100.0,
        suffix: 'K',
    },
];

/// Format a large figure with a magnitude suffix.
///
/// Returns `None` when the value cannot be formatted; the cause is logged.
///
/// # Examples
/// ```
/// use decimal_display::format::{parse_with_unit, Rendered, UnitKind};
///
/// assert_eq!(
///     parse_with_unit(2_500_000_000u64, UnitKind::Default),
///     Some(Rendered::from("2.5B"))
/// );
/// assert_eq!(parse_with_unit(0.5, UnitKind::Tvl), Some(Rendered::Zero));
/// ```
pub fn parse_with_unit(value: impl Into<NumericInput>, kind: UnitKind) -> Option<Rendered> {
    let value = value.into();
    match render_unit(&value, kind) {
        Ok(rendered) => rendered,
        Err(err) => {
            tracing::warn!(input = %value, ?kind, error = %err, "unit formatting failed");
            None
        },
    }
}

fn render_unit(value: &NumericInput, kind: UnitKind) -> NumericResult<Option<Rendered>> {
    let v = value.to_f64()?;

    if let Some(band) = BANDS.iter().find(|band| v >= band.floor) {
        let scaled = (v / band.divisor).round() / band.denominator;
        return Ok(Some(Rendered::Text(format!(
            "{}{}",
            number_to_string(scaled),
            band.suffix
        ))));
    }

    let rendered = if v >= 1.0 {
        Rendered::Text(to_fixed(v, 1))
    } else if v > 0.0 {
        if kind == UnitKind::Tvl {
            Rendered::Zero
        } else {
            let text = positional_text(value, v);
            match DigitWindow::locate(&text) {
                Some(window) => Rendered::Text(window.plain()),
                None => return Ok(None),
            }
        }
    } else {
        Rendered::Zero
    };

    Ok(Some(rendered))
}

/// Text without exponent notation: a string input keeps its spelling,
/// anything else is expanded positionally.
fn positional_text(value: &NumericInput, v: f64) -> Cow<'_, str> {
    match value {
        NumericInput::Text(s) if !s.contains(['e', 'E']) => Cow::Borrowed(s.trim()),
        _ => Cow::Owned(plain_decimal(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<Rendered> {
        Some(Rendered::from(s))
    }

    #[test]
    fn test_magnitude_bands() {
        assert_eq!(parse_with_unit(1.5e12, UnitKind::Default), text("1.5T"));
        assert_eq!(parse_with_unit(2_500_000_000u64, UnitKind::Default), text("2.5B"));
        assert_eq!(parse_with_unit(1_234_567, UnitKind::Default), text("1.23M"));
        assert_eq!(parse_with_unit(15_000, UnitKind::Default), text("15K"));
        assert_eq!(parse_with_unit(12_345, UnitKind::Default), text("12.35K"));
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(parse_with_unit(1e12, UnitKind::Default), text("1T"));
        assert_eq!(parse_with_unit(1e9, UnitKind::Default), text("1B"));
        assert_eq!(parse_with_unit(1e6, UnitKind::Default), text("1M"));
        assert_eq!(parse_with_unit(10_000, UnitKind::Default), text("10K"));
        assert_eq!(parse_with_unit(9_999, UnitKind::Default), text("9999.0"));
    }

    #[test]
    fn test_small_range_one_decimal() {
        assert_eq!(parse_with_unit(1, UnitKind::Default), text("1.0"));
        assert_eq!(parse_with_unit(123.456, UnitKind::Default), text("123.5"));
    }

    #[test]
    fn test_sub_unit_window() {
        assert_eq!(parse_with_unit(0.5, UnitKind::Default), text("0.5"));
        assert_eq!(parse_with_unit(0.000123456, UnitKind::Default), text("0.000123"));
        // No zero-run shorthand here, even far below 1e-6
        assert_eq!(parse_with_unit(1.5e-7, UnitKind::Default), text("0.00000015"));
        assert_eq!(parse_with_unit("0.000500", UnitKind::Default), text("0.000500"));
    }

    #[test]
    fn test_tvl_collapses_sub_unit() {
        assert_eq!(parse_with_unit(0.5, UnitKind::Tvl), Some(Rendered::Zero));
        assert_eq!(parse_with_unit(2_500_000_000u64, UnitKind::Tvl), text("2.5B"));
    }

    #[test]
    fn test_non_positive_is_zero() {
        assert_eq!(parse_with_unit(-5, UnitKind::Default), Some(Rendered::Zero));
        assert_eq!(parse_with_unit(0, UnitKind::Default), Some(Rendered::Zero));
        assert_eq!(parse_with_unit(f64::NAN, UnitKind::Default), Some(Rendered::Zero));
    }

    #[test]
    fn test_unformattable_input() {
        assert_eq!(parse_with_unit("lots", UnitKind::Default), None);
    }

    #[test]
    fn test_unit_kind_from_tag() {
        assert_eq!(UnitKind::from("tvl"), UnitKind::Tvl);
        assert_eq!(UnitKind::from("volume"), UnitKind::Default);
        assert_eq!(UnitKind::default(), UnitKind::Default);
    }
}
