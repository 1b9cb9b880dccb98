//! Verhoeff check-digit scheme over decimal digit strings.
//!
//! Detects every single-digit substitution and every adjacent transposition.
//! Aadhaar numbers carry a Verhoeff check digit in their last position.

/// Multiplication table of the dihedral group D5.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutation table; row `i % 8` applies to the digit
/// `i` places from the right.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Multiplicative inverses in D5.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Run the Verhoeff reduction over `digits`, right to left, with the first
/// processed digit at permutation row `offset`.
fn reduce(digits: &str, offset: usize) -> Option<u8> {
    let mut c = 0u8;
    for (i, ch) in digits.chars().rev().enumerate() {
        let digit = ch.to_digit(10)? as usize;
        c = D[c as usize][P[(i + offset) % 8][digit] as usize];
    }
    Some(c)
}

/// Final running total over a complete number (payload plus check digit).
///
/// Returns `None` if `digits` contains anything other than ASCII digits.
/// A number is valid exactly when this is `Some(0)`.
pub fn checksum(digits: &str) -> Option<u8> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    reduce(digits, 0)
}

/// Whether `digits` (payload followed by its check digit) verifies.
pub fn is_valid(digits: &str) -> bool {
    !digits.is_empty() && checksum(digits) == Some(0)
}

/// Compute the check digit to append to `payload`.
pub fn generate(payload: &str) -> Option<char> {
    if !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let c = reduce(payload, 1)?;
    char::from_digit(INV[c as usize] as u32, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aadhaar_vector_verifies() {
        assert_eq!(checksum("234123412346"), Some(0));
        assert!(is_valid("234123412346"));
    }

    #[test]
    fn altered_last_digit_fails() {
        assert!(!is_valid("234123412347"));
    }

    #[test]
    fn adjacent_transposition_fails() {
        assert!(!is_valid("234123412364"));
    }

    #[test]
    fn classic_textbook_vector() {
        // 236 -> check digit 3.
        assert_eq!(generate("236"), Some('3'));
        assert!(is_valid("2363"));
    }

    #[test]
    fn generate_produces_verifying_numbers() {
        for payload in ["98765432101", "45678901234", "20000000000", "55555555555"] {
            let check = generate(payload).unwrap();
            let full = format!("{payload}{check}");
            assert!(is_valid(&full), "{full} should verify");
        }
    }

    #[test]
    fn generated_digits_match_reference_values() {
        assert_eq!(generate("23412341234"), Some('6'));
        assert_eq!(generate("98765432101"), Some('2'));
        assert_eq!(generate("45678901234"), Some('1'));
    }

    #[test]
    fn every_single_digit_substitution_is_detected() {
        let valid = "499118665246";
        for pos in 0..valid.len() {
            for replacement in b'0'..=b'9' {
                let mut bytes = valid.as_bytes().to_vec();
                if bytes[pos] == replacement {
                    continue;
                }
                bytes[pos] = replacement;
                let altered = String::from_utf8(bytes).unwrap();
                assert!(!is_valid(&altered), "{altered} should fail");
            }
        }
    }

    #[test]
    fn non_digits_have_no_checksum() {
        assert_eq!(checksum("12345678901a"), None);
        assert_eq!(generate("12a"), None);
    }

    #[test]
    fn empty_string_is_not_valid() {
        assert!(!is_valid(""));
    }
}
