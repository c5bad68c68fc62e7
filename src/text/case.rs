// ============================================================================
// Case Conversion
// ============================================================================

use crate::numeric::NumericError;

/// Target casing for [`turn_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// `HELLO WORLD`
    Upper,
    /// `hello world`
    Lower,
    /// `Hello world`
    Capitalize,
}

impl TryFrom<u8> for CaseMode {
    type Error = NumericError;

    /// `1` upper, `2` lower, `3` capitalize.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CaseMode::Upper),
            2 => Ok(CaseMode::Lower),
            3 => Ok(CaseMode::Capitalize),
            other => Err(NumericError::InvalidCaseMode(other)),
        }
    }
}

/// Change the case of `s`.
pub fn turn_case(s: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => s.to_uppercase(),
        CaseMode::Lower => s.to_lowercase(),
        CaseMode::Capitalize => {
            let mut chars = s.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                },
                None => String::new(),
            }
        },
    }
}
