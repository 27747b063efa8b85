use std::fmt;

use crate::digits::Candidate;
use crate::validation::{IsbnError, IsbnFormat};

/// Bookland prefix prepended when converting an ISBN-10.
const BOOKLAND_PREFIX: [u8; 3] = [9, 7, 8];

/// Thirteen digit values (0-9) that satisfy the EAN-13 checksum.
///
/// Only produced by [`validate_and_normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDigits([u8; 13]);

impl CanonicalDigits {
    /// Digit values, most significant first.
    pub fn as_array(&self) -> &[u8; 13] {
        &self.0
    }

    /// Digits as ASCII text without separators.
    pub fn to_compact_string(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

impl AsRef<[u8]> for CanonicalDigits {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for CanonicalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact_string())
    }
}

/// Validates the checksum of a candidate and returns its canonical 13-digit form.
///
/// ISBN-13 candidates are checked with the alternating 1/3 weights modulo 10
/// and returned unchanged. ISBN-10 candidates are checked with weights 10..1
/// modulo 11, then rewritten as `978` + the first nine digits + a fresh EAN-13
/// check digit; the original check character is discarded.
///
/// # Errors
///
/// Returns [`IsbnError::ChecksumMismatch`] naming the failing format.
pub fn validate_and_normalize(candidate: Candidate) -> Result<CanonicalDigits, IsbnError> {
    let mut out = [0u8; 13];
    match candidate {
        Candidate::Isbn13 { digits, check } => {
            if (ean13_weighted_sum(&digits) + u32::from(check)) % 10 != 0 {
                return Err(IsbnError::ChecksumMismatch {
                    format: IsbnFormat::Isbn13,
                });
            }
            out[..12].copy_from_slice(&digits);
            out[12] = check;
        }
        Candidate::Isbn10 { digits, check } => {
            if (isbn10_weighted_sum(&digits) + u32::from(check)) % 11 != 0 {
                return Err(IsbnError::ChecksumMismatch {
                    format: IsbnFormat::Isbn10,
                });
            }
            let mut body = [0u8; 12];
            body[..3].copy_from_slice(&BOOKLAND_PREFIX);
            body[3..].copy_from_slice(&digits);
            out[..12].copy_from_slice(&body);
            out[12] = ean13_check_digit(&body);
        }
    }
    Ok(CanonicalDigits(out))
}

/// EAN-13 check digit for the first twelve digits.
pub fn ean13_check_digit(digits: &[u8; 12]) -> u8 {
    ((10 - ean13_weighted_sum(digits) % 10) % 10) as u8
}

/// ISBN-10 check value for the first nine digits; `10` stands for `X`.
pub fn isbn10_check_digit(digits: &[u8; 9]) -> u8 {
    ((11 - isbn10_weighted_sum(digits) % 11) % 11) as u8
}

fn ean13_weighted_sum(digits: &[u8; 12]) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(idx, &d)| u32::from(d) * if idx % 2 == 0 { 1 } else { 3 })
        .sum()
}

fn isbn10_weighted_sum(digits: &[u8; 9]) -> u32 {
    digits
        .iter()
        .zip((2..=10u32).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::extract;

    fn normalize(input: &str) -> Result<String, IsbnError> {
        validate_and_normalize(extract(input)?).map(|d| d.to_compact_string())
    }

    #[test]
    fn isbn13_passes_through_unchanged() {
        assert_eq!(normalize("9780639963549").unwrap(), "9780639963549");
        assert_eq!(normalize("979-8421221814").unwrap(), "9798421221814");
    }

    #[test]
    fn isbn10_is_rewritten_with_bookland_prefix() {
        assert_eq!(normalize("0-6399635-4-4").unwrap(), "9780639963549");
        assert_eq!(normalize("0306406152").unwrap(), "9780306406157");
    }

    #[test]
    fn isbn10_x_check_is_discarded() {
        assert_eq!(normalize("394718834-X").unwrap(), "9783947188345");
        assert_eq!(normalize("043942089x").unwrap(), "9780439420891");
    }

    #[test]
    fn checksum_mismatch_names_format() {
        assert_eq!(
            normalize("0306406153"),
            Err(IsbnError::ChecksumMismatch {
                format: IsbnFormat::Isbn10
            })
        );
        assert_eq!(
            normalize("9780306406158"),
            Err(IsbnError::ChecksumMismatch {
                format: IsbnFormat::Isbn13
            })
        );
    }

    #[test]
    fn check_digit_helpers() {
        assert_eq!(ean13_check_digit(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5]), 7);
        assert_eq!(ean13_check_digit(&[9, 7, 8, 8, 8, 0, 0, 0, 0, 0, 0, 0]), 0);
        assert_eq!(isbn10_check_digit(&[0, 3, 0, 6, 4, 0, 6, 1, 5]), 2);
        assert_eq!(isbn10_check_digit(&[3, 9, 4, 7, 1, 8, 8, 3, 4]), 10);
        assert_eq!(isbn10_check_digit(&[0; 9]), 0);
    }
}
