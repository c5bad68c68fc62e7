// ============================================================================
// Significant Digit Window
// Locates the decimal point and first significant digit in a number's text
// ============================================================================

/// Number of significant digits kept by the windowed renderings.
pub const SIGNIFICANT_DIGITS: usize = 3;

/// Position of the point and the first non-zero fraction digit in a
/// number's text.
#[derive(Debug)]
pub(crate) struct DigitWindow {
    chars: Vec<char>,
    point: usize,
    first: usize,
}

impl DigitWindow {
    /// Scan `text`. Returns `None` when it has no decimal point.
    ///
    /// If no non-zero digit follows the point, `first` stays on the point.
    pub(crate) fn locate(text: &str) -> Option<Self> {
        let chars: Vec<char> = text.chars().collect();
        let point = chars.iter().position(|c| *c == '.')?;
        let first = chars
            .iter()
            .enumerate()
            .skip(point + 1)
            .find(|(_, c)| **c != '0')
            .map_or(point, |(i, _)| i);

        Some(Self {
            chars,
            point,
            first,
        })
    }

    /// Zeros between the point and the first significant digit.
    #[inline]
    pub(crate) fn leading_zeros(&self) -> usize {
        self.first.saturating_sub(self.point + 1)
    }

    fn end(&self) -> usize {
        (self.first + SIGNIFICANT_DIGITS).min(self.chars.len())
    }

    /// Everything up to and including the first three significant digits,
    /// e.g. `"0.000123456"` -> `"0.000123"`.
    pub(crate) fn plain(&self) -> String {
        self.chars[..self.end()].iter().collect()
    }

    /// The `0.0{N}ddd` zero-run shorthand, e.g. `"0.00001234"` -> `"0.0{4}123"`.
    pub(crate) fn shorthand(&self) -> String {
        let digits: String = self.chars[self.first..self.end()].iter().collect();
        zero_run(self.leading_zeros() as i64, &digits)
    }
}

/// Build the `0.0{N}ddd` zero-run notation. The braces are literal.
#[inline]
pub(crate) fn zero_run(zero_count: i64, digits: &str) -> String {
    format!("0.0{{{}}}{}", zero_count, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate() {
        let w = DigitWindow::locate("0.000123456").unwrap();
        assert_eq!(w.point, 1);
        assert_eq!(w.first, 5);
        assert_eq!(w.leading_zeros(), 3);

        assert!(DigitWindow::locate("123").is_none());
    }

    #[test]
    fn test_plain() {
        assert_eq!(DigitWindow::locate("0.000123456").unwrap().plain(), "0.000123");
        assert_eq!(DigitWindow::locate("0.5").unwrap().plain(), "0.5");
        assert_eq!(DigitWindow::locate("0.12345").unwrap().plain(), "0.123");
    }

    #[test]
    fn test_shorthand() {
        assert_eq!(
            DigitWindow::locate("0.00001234").unwrap().shorthand(),
            "0.0{4}123"
        );
        assert_eq!(
            DigitWindow::locate("0.000050").unwrap().shorthand(),
            "0.0{4}50"
        );
    }

    #[test]
    fn test_all_zero_fraction() {
        let w = DigitWindow::locate("0.000").unwrap();
        assert_eq!(w.first, w.point);
        assert_eq!(w.leading_zeros(), 0);
        assert_eq!(w.plain(), "0.00");
    }

    #[test]
    fn test_zero_run() {
        assert_eq!(zero_run(8, "123"), "0.0{8}123");
    }
}
