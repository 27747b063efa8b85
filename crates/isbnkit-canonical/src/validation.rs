use std::fmt;

use thiserror::Error;

/// Source format of an ISBN candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsbnFormat {
    /// Legacy 10-character ISBN (mod 11 checksum, `X` allowed as check character).
    Isbn10,
    /// 13-digit EAN form (mod 10 checksum).
    Isbn13,
}

impl fmt::Display for IsbnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnFormat::Isbn10 => write!(f, "ISBN-10"),
            IsbnFormat::Isbn13 => write!(f, "ISBN-13"),
        }
    }
}

/// Errors returned when an ISBN is absent or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsbnError {
    /// No input was supplied at all. This is a caller error, not a format error.
    #[error("no ISBN was provided")]
    MissingInput,
    /// The input is empty (after trimming surrounding whitespace).
    #[error("ISBN is empty")]
    Empty,
    /// A character is not allowed at its position.
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter {
        /// Zero-based character index.
        position: usize,
        /// Offending character.
        found: char,
    },
    /// The digit count is neither 10 nor 13.
    #[error("expected 10 or 13 digits, found {}", digit_count(.digits))]
    WrongLength {
        /// Digits seen before the input was rejected. Scanning stops at the
        /// 13th body digit, so 13 means "13 or more".
        digits: usize,
    },
    /// The digits fail the checksum of their format.
    #[error("{format} checksum mismatch")]
    ChecksumMismatch {
        /// Format whose checksum failed.
        format: IsbnFormat,
    },
    /// The number is well-formed but its prefix has not been allocated.
    #[error("{digits} is not in an assigned registrant range")]
    UnassignedRange {
        /// Canonical 13-digit form of the rejected ISBN.
        digits: String,
    },
}

/// Fieldless classification of [`IsbnError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`IsbnError::MissingInput`].
    MissingInput,
    /// See [`IsbnError::Empty`].
    Empty,
    /// See [`IsbnError::InvalidCharacter`].
    InvalidCharacter,
    /// See [`IsbnError::WrongLength`].
    WrongLength,
    /// See [`IsbnError::ChecksumMismatch`].
    ChecksumMismatch,
    /// See [`IsbnError::UnassignedRange`].
    UnassignedRange,
}

impl ErrorKind {
    /// Stable snake_case code for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingInput => "missing_input",
            ErrorKind::Empty => "empty",
            ErrorKind::InvalidCharacter => "invalid_character",
            ErrorKind::WrongLength => "wrong_length",
            ErrorKind::ChecksumMismatch => "checksum_mismatch",
            ErrorKind::UnassignedRange => "unassigned_range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IsbnError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IsbnError::MissingInput => ErrorKind::MissingInput,
            IsbnError::Empty => ErrorKind::Empty,
            IsbnError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            IsbnError::WrongLength { .. } => ErrorKind::WrongLength,
            IsbnError::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            IsbnError::UnassignedRange { .. } => ErrorKind::UnassignedRange,
        }
    }

    /// True when no input was supplied.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, IsbnError::MissingInput)
    }

    /// True when input was supplied but rejected.
    pub fn is_format_error(&self) -> bool {
        !self.is_missing_input()
    }
}

fn digit_count(digits: &usize) -> String {
    if *digits > 12 {
        format!("at least {digits}")
    } else {
        digits.to_string()
    }
}
