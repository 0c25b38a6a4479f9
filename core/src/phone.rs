//! Phone number utilities
//!
//! E.164 normalization and validation for SMS recipients. The normalizer
//! accepts the loosely formatted numbers users actually type (spaces,
//! dashes, parentheses, an optional leading `+`) and produces the canonical
//! `+<country code><national number>` form Twilio expects.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FormatError;

/// Regular expression for valid E.164 format:
/// `+`, a country code that does not start with 0, at most 15 digits total.
static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{0,14}$").unwrap());

/// Maximum digits after the `+` per E.164.
const MAX_E164_DIGITS: usize = 15;

/// National numbers are at most this long in the markets we serve. A digit
/// string longer than this that starts with the default country code is
/// taken as already international. This is a heuristic, not a full
/// numbering-plan parser.
const MAX_NATIONAL_DIGITS: usize = 10;

/// Normalize a raw phone number to E.164 format
///
/// Formatting characters (whitespace, `-`, `(`, `)`, `.`) are stripped.
/// A `+` is honored only in the leading position. Any other character,
/// letters included, fails the call rather than being silently dropped.
///
/// Numbers without a `+` are interpreted against `default_country_code`:
/// either the digits already embed it as a prefix, or they are treated as
/// a national number and the code is prepended.
///
/// # Arguments
///
/// * `raw` - Phone number as supplied by the user
/// * `default_country_code` - 1-3 digit country code without `+` (e.g. "91")
///
/// # Returns
///
/// * `Ok(String)` - The number in `+digits` form, 1-15 digits after the `+`
/// * `Err(FormatError)` - When the input cannot be resolved to E.164
///
/// # Examples
///
/// ```
/// use sd_core::phone::normalize_e164;
///
/// assert_eq!(normalize_e164("9876543210", "91").unwrap(), "+919876543210");
/// assert_eq!(normalize_e164("+1234567890", "91").unwrap(), "+1234567890");
/// assert!(normalize_e164("abc123", "91").is_err());
/// ```
pub fn normalize_e164(raw: &str, default_country_code: &str) -> Result<String, FormatError> {
    if default_country_code.is_empty()
        || default_country_code.len() > 3
        || !default_country_code.chars().all(|c| c.is_ascii_digit())
    {
        return Err(FormatError::InvalidCountryCode {
            code: default_country_code.to_string(),
        });
    }

    let cleaned = strip_formatting(raw)?;

    // Already international: validate length and return unchanged.
    if let Some(digits) = cleaned.strip_prefix('+') {
        if digits.is_empty() {
            return Err(FormatError::Empty);
        }
        if digits.len() > MAX_E164_DIGITS {
            return Err(FormatError::ImplausibleLength {
                digits: digits.len(),
            });
        }
        return Ok(cleaned);
    }

    if cleaned.is_empty() {
        return Err(FormatError::Empty);
    }

    let normalized = if cleaned.len() > MAX_NATIONAL_DIGITS
        && cleaned.starts_with(default_country_code)
    {
        // Country code already embedded in the digit string.
        format!("+{cleaned}")
    } else {
        format!("+{default_country_code}{cleaned}")
    };

    let digits = normalized.len() - 1;
    if digits > MAX_E164_DIGITS {
        return Err(FormatError::ImplausibleLength { digits });
    }

    Ok(normalized)
}

/// Remove accepted formatting characters, keeping digits and a leading `+`.
fn strip_formatting(raw: &str) -> Result<String, FormatError> {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '+' if out.is_empty() => out.push(c),
            c if c.is_ascii_digit() => out.push(c),
            c if c.is_whitespace() => {}
            '-' | '(' | ')' | '.' => {}
            other => return Err(FormatError::InvalidCharacter { found: other }),
        }
    }
    Ok(out)
}

/// Validates if a phone number is in strict E.164 format
///
/// Used for configured sender numbers, which must already be canonical:
/// `+`, country code not starting with 0, at most 15 digits.
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Mask a phone number for display and logging (show only last 4 digits)
pub fn mask_phone(phone: &str) -> String {
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }
    format!("***{}", &phone[phone.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_national_number_with_default_country_code() {
        assert_eq!(
            normalize_e164("9876543210", "91").unwrap(),
            "+919876543210"
        );
    }

    #[test]
    fn keeps_international_numbers_unchanged() {
        assert_eq!(
            normalize_e164("+919876543210", "91").unwrap(),
            "+919876543210"
        );
        // Foreign country code stays untouched
        assert_eq!(
            normalize_e164("+1234567890", "91").unwrap(),
            "+1234567890"
        );
    }

    #[test]
    fn detects_embedded_country_code() {
        assert_eq!(
            normalize_e164("919876543210", "91").unwrap(),
            "+919876543210"
        );
        // 10 digits is a plain national number even when it starts with 91
        assert_eq!(
            normalize_e164("9187654321", "91").unwrap(),
            "+919187654321"
        );
    }

    #[test]
    fn strips_common_formatting() {
        assert_eq!(
            normalize_e164("(987) 654-3210", "91").unwrap(),
            "+919876543210"
        );
        assert_eq!(
            normalize_e164("+91 98765.43210", "91").unwrap(),
            "+919876543210"
        );
    }

    #[test]
    fn is_idempotent() {
        for raw in ["9876543210", "+919876543210", "919876543210", "+1234567890"] {
            let once = normalize_e164(raw, "91").unwrap();
            let twice = normalize_e164(&once, "91").unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(normalize_e164("", "91"), Err(FormatError::Empty));
        assert_eq!(normalize_e164("  - ", "91"), Err(FormatError::Empty));
        assert_eq!(normalize_e164("+", "91"), Err(FormatError::Empty));
    }

    #[test]
    fn rejects_letters() {
        assert_eq!(
            normalize_e164("abc123", "91"),
            Err(FormatError::InvalidCharacter { found: 'a' })
        );
        assert!(normalize_e164("98765x3210", "91").is_err());
    }

    #[test]
    fn rejects_interior_plus() {
        assert_eq!(
            normalize_e164("98+76543210", "91"),
            Err(FormatError::InvalidCharacter { found: '+' })
        );
    }

    #[test]
    fn rejects_implausible_lengths() {
        assert_eq!(
            normalize_e164("+1234567890123456", "91"),
            Err(FormatError::ImplausibleLength { digits: 16 })
        );
        // 14 national digits plus a 2 digit code overflows E.164
        assert!(normalize_e164("12345678901234", "91").is_err());
    }

    #[test]
    fn rejects_bad_country_code() {
        for code in ["", "9191", "+91", "9a"] {
            assert_eq!(
                normalize_e164("9876543210", code),
                Err(FormatError::InvalidCountryCode {
                    code: code.to_string()
                })
            );
        }
    }

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+919876543210"));
        assert!(is_valid_e164("+14155552671"));
        assert!(!is_valid_e164("9876543210")); // Missing +
        assert!(!is_valid_e164("+0123456789")); // Country code starts with 0
        assert!(!is_valid_e164("+1234567890123456")); // Too long
        assert!(!is_valid_e164("+"));
        assert!(!is_valid_e164(""));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+919876543210"), "***3210");
        assert_eq!(mask_phone("+123"), "****");
        assert_eq!(mask_phone("123"), "***");
    }
}
