// ============================================================================
// Phone Number Masking
// ============================================================================

const MOBILE_DIGITS: usize = 11;

/// Mask the middle four digits of an 11-digit mobile number:
/// `13812345678` -> `138****5678`. Anything else is returned unchanged.
pub fn hide_mobile(mobile: &str) -> String {
    if mobile.len() != MOBILE_DIGITS || !mobile.bytes().all(|b| b.is_ascii_digit()) {
        return mobile.to_string();
    }
    format!("{}****{}", &mobile[..3], &mobile[7..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_hide_mobile() {
        assert_eq!(hide_mobile("13812345678"), "138****5678");
        assert_eq!(hide_mobile("1381234567"), "1381234567");
        assert_eq!(hide_mobile("138-1234-567"), "138-1234-567");
        assert_eq!(hide_mobile(""), "");
    }

    quickcheck! {
        fn prop_masking_preserves_length(digits: Vec<u8>) -> bool {
            let mobile: String = digits
                .iter()
                .take(MOBILE_DIGITS)
                .map(|d| char::from(b'0' + d % 10))
                .collect();
            hide_mobile(&mobile).chars().count() == mobile.chars().count()
        }
    }
}
