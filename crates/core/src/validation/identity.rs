//! Aadhaar, PAN, mobile, email and PIN code rules.

use std::sync::LazyLock;

use regex::Regex;

use super::field::FieldError;
use super::verhoeff;

const AADHAAR_LEN: usize = 12;
const PAN_LEN: usize = 10;

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid regex"));

/// Exactly one `@`; the domain needs a dot, and no part may contain `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Aadhaar
// ---------------------------------------------------------------------------

/// Exactly 12 ASCII digits, not all the same digit, Verhoeff checksum zero.
pub fn check_aadhaar(raw: &str) -> Result<(), FieldError> {
    if raw.len() != AADHAAR_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::format("Aadhaar number must be exactly 12 digits"));
    }

    let first = raw.as_bytes()[0];
    if raw.bytes().all(|b| b == first) {
        return Err(FieldError::format(
            "Aadhaar number cannot be a single repeated digit",
        ));
    }

    if !verhoeff::is_valid(raw) {
        return Err(FieldError::checksum(
            "Aadhaar number failed checksum verification",
        ));
    }

    Ok(())
}

pub fn is_valid_aadhaar(raw: &str) -> bool {
    check_aadhaar(raw).is_ok()
}

// ---------------------------------------------------------------------------
// PAN
// ---------------------------------------------------------------------------

/// Uppercase form used for matching and storage.
pub fn normalize_pan(raw: &str) -> String {
    raw.to_uppercase()
}

/// Five letters, four digits, one letter; case-insensitive.
pub fn check_pan(raw: &str) -> Result<(), FieldError> {
    let pan = normalize_pan(raw);
    if pan.chars().count() != PAN_LEN || !PAN_RE.is_match(&pan) {
        return Err(FieldError::format(
            "PAN must be 5 letters, 4 digits and 1 letter (e.g. ABCDE1234F)",
        ));
    }
    Ok(())
}

pub fn is_valid_pan(raw: &str) -> bool {
    check_pan(raw).is_ok()
}

// ---------------------------------------------------------------------------
// Mobile
// ---------------------------------------------------------------------------

/// Keep only the ASCII digits of `raw`.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn is_mobile_lead(digit: u8) -> bool {
    (b'6'..=b'9').contains(&digit)
}

/// Indian mobile number, with or without the `91` country prefix.
///
/// Separators such as spaces, dashes and a leading `+` are ignored.
pub fn check_mobile(raw: &str) -> Result<(), FieldError> {
    let digits = digits_only(raw);
    let bytes = digits.as_bytes();

    let ok = match bytes.len() {
        10 => is_mobile_lead(bytes[0]),
        12 => digits.starts_with("91") && is_mobile_lead(bytes[2]),
        _ => false,
    };

    if ok {
        Ok(())
    } else {
        Err(FieldError::format(
            "Mobile number must be 10 digits starting with 6-9, optionally prefixed by 91",
        ))
    }
}

pub fn is_valid_mobile(raw: &str) -> bool {
    check_mobile(raw).is_ok()
}

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

/// `local@domain.tld` shape; deliberately looser than RFC 5322.
pub fn check_email(raw: &str) -> Result<(), FieldError> {
    if EMAIL_RE.is_match(raw) {
        Ok(())
    } else {
        Err(FieldError::format("Enter a valid email address"))
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    check_email(raw).is_ok()
}

// ---------------------------------------------------------------------------
// PIN code
// ---------------------------------------------------------------------------

/// Six digits, not starting with zero.
pub fn check_pincode(raw: &str) -> Result<(), FieldError> {
    let bytes = raw.as_bytes();
    let ok = bytes.len() == 6 && bytes.iter().all(u8::is_ascii_digit) && bytes[0] != b'0';
    if ok {
        Ok(())
    } else {
        Err(FieldError::format(
            "PIN code must be 6 digits and cannot start with 0",
        ))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::validation::FieldErrorKind;

    // -- Aadhaar ----------------------------------------------------------

    #[test]
    fn aadhaar_accepts_valid_checksums() {
        for number in ["234123412346", "499118665246", "987654321012", "456789012341"] {
            assert!(is_valid_aadhaar(number), "{number} should be valid");
        }
    }

    #[test]
    fn aadhaar_rejects_every_repeated_digit() {
        for d in '0'..='9' {
            let number: String = std::iter::repeat(d).take(12).collect();
            let err = check_aadhaar(&number).unwrap_err();
            assert_eq!(err.kind, FieldErrorKind::Format, "{}", number);
        }
    }

    #[test]
    fn aadhaar_repeated_digit_rejected_even_when_checksum_passes() {
        // 333333333333 happens to verify under Verhoeff.
        assert!(verhoeff::is_valid("333333333333"));
        assert!(!is_valid_aadhaar("333333333333"));
    }

    #[test]
    fn aadhaar_rejects_altered_last_digit_as_checksum_error() {
        let err = check_aadhaar("234123412347").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Checksum);
    }

    #[test]
    fn aadhaar_rejects_sequential_number() {
        assert_matches!(
            check_aadhaar("123456789012"),
            Err(FieldError { kind: FieldErrorKind::Checksum, .. })
        );
    }

    #[test]
    fn aadhaar_rejects_wrong_length_and_non_digits() {
        for number in ["", "12345678901", "1234567890123", "12345678901a", "2341 2341 2346"] {
            assert_matches!(
                check_aadhaar(number),
                Err(FieldError { kind: FieldErrorKind::Format, .. }),
                "{} should be a format error",
                number
            );
        }
    }

    #[test]
    fn aadhaar_rejects_non_ascii_digits() {
        // Devanagari digits are Unicode digits but not ASCII.
        assert!(!is_valid_aadhaar("२३४१२३४१२३४६"));
    }

    // -- PAN --------------------------------------------------------------

    #[test]
    fn pan_accepts_uppercase_and_lowercase() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(is_valid_pan("abcde1234f"));
        assert!(is_valid_pan("ABCDE1234f"));
    }

    #[test]
    fn pan_rejects_bad_shapes() {
        for pan in ["ABCDE12345", "ABCD1234F", "12345ABCDE", "", "ABCDE1234FG", " ABCDE1234F"] {
            assert!(!is_valid_pan(pan), "{pan} should be invalid");
        }
    }

    #[test]
    fn pan_normalizes_to_uppercase() {
        assert_eq!(normalize_pan("abcde1234f"), "ABCDE1234F");
    }

    // -- Mobile -----------------------------------------------------------

    #[test]
    fn mobile_accepts_ten_digits_starting_six_to_nine() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("6000000000"));
    }

    #[test]
    fn mobile_rejects_leading_five() {
        assert!(!is_valid_mobile("5876543210"));
    }

    #[test]
    fn mobile_accepts_country_prefix() {
        assert!(is_valid_mobile("919876543210"));
        assert!(is_valid_mobile("+91 98765-43210"));
    }

    #[test]
    fn mobile_rejects_prefix_with_bad_lead_digit() {
        assert!(!is_valid_mobile("929876543210"));
        assert!(!is_valid_mobile("915876543210"));
    }

    #[test]
    fn mobile_rejects_other_lengths() {
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432100"));
        assert!(!is_valid_mobile("0919876543210"));
        assert!(!is_valid_mobile(""));
    }

    // -- Email ------------------------------------------------------------

    #[test]
    fn email_accepts_simple_address() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.in"));
    }

    #[test]
    fn email_rejects_missing_dot_and_whitespace() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_rejects_second_at_after_domain_dot() {
        assert!(!is_valid_email("a@b.c@d"));
        assert!(is_valid_email("a@b.c.d"));
    }

    // -- PIN code ---------------------------------------------------------

    #[test]
    fn pincode_rules() {
        assert!(check_pincode("560001").is_ok());
        assert!(check_pincode("060001").is_err());
        assert!(check_pincode("56000").is_err());
        assert!(check_pincode("56000a").is_err());
    }
}
