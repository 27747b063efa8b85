use crate::validation::{IsbnError, IsbnFormat};

/// Separator glyphs skipped between digits: hyphen-minus, underscore, en dash,
/// em dash, and minus sign.
pub const SEPARATORS: [char; 5] = ['-', '_', '\u{2013}', '\u{2014}', '\u{2212}'];

/// Digits that may accumulate before the last character.
const MAX_BODY_DIGITS: usize = 12;

/// Digit sequence extracted from raw input, tagged by source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// Nine digits plus a check value in `0..=10` (10 is written `X`).
    Isbn10 {
        /// Digit values 0-9.
        digits: [u8; 9],
        /// Check value 0-10.
        check: u8,
    },
    /// Twelve digits plus a check digit.
    Isbn13 {
        /// Digit values 0-9.
        digits: [u8; 12],
        /// Check digit 0-9.
        check: u8,
    },
}

impl Candidate {
    /// Format of the source text.
    pub fn format(&self) -> IsbnFormat {
        match self {
            Candidate::Isbn10 { .. } => IsbnFormat::Isbn10,
            Candidate::Isbn13 { .. } => IsbnFormat::Isbn13,
        }
    }
}

/// Extracts an ISBN-10 or ISBN-13 candidate from already-trimmed text.
///
/// The first character must be a digit. Interior characters are digits or one
/// of [`SEPARATORS`]. The last character is the check character: a digit, or
/// `X`/`x` after exactly nine digits.
///
/// # Errors
///
/// - [`IsbnError::Empty`] for empty input
/// - [`IsbnError::InvalidCharacter`] for a character outside the allowed set
/// - [`IsbnError::WrongLength`] when the digit count is neither 10 nor 13
pub fn extract(input: &str) -> Result<Candidate, IsbnError> {
    let mut chars = input.chars();
    let first = chars.next().ok_or(IsbnError::Empty)?;

    let mut body = [0u8; MAX_BODY_DIGITS];
    body[0] = decimal(first).ok_or(IsbnError::InvalidCharacter {
        position: 0,
        found: first,
    })?;
    let mut len = 1;

    let Some(last) = chars.next_back() else {
        return Err(IsbnError::WrongLength { digits: 1 });
    };

    let mut position = 1;
    for ch in chars {
        if let Some(digit) = decimal(ch) {
            if len == MAX_BODY_DIGITS {
                return Err(IsbnError::WrongLength { digits: len + 1 });
            }
            body[len] = digit;
            len += 1;
        } else if !SEPARATORS.contains(&ch) {
            return Err(IsbnError::InvalidCharacter {
                position,
                found: ch,
            });
        }
        position += 1;
    }

    let invalid_last = IsbnError::InvalidCharacter {
        position,
        found: last,
    };
    match len {
        9 => {
            let check = match last {
                'X' | 'x' => 10,
                _ => decimal(last).ok_or(invalid_last)?,
            };
            let mut digits = [0u8; 9];
            digits.copy_from_slice(&body[..9]);
            Ok(Candidate::Isbn10 { digits, check })
        }
        MAX_BODY_DIGITS => {
            let check = decimal(last).ok_or(invalid_last)?;
            Ok(Candidate::Isbn13 {
                digits: body,
                check,
            })
        }
        _ => Err(IsbnError::WrongLength {
            digits: len + usize::from(decimal(last).is_some()),
        }),
    }
}

fn decimal(ch: char) -> Option<u8> {
    ch.to_digit(10).map(|d| d as u8)
}
