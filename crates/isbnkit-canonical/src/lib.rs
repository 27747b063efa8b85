//! ISBN parsing, validation and canonicalization.
//!
//! Input flows through three stages:
//! - [`digits::extract`] turns trimmed text into a tagged ISBN-10 or ISBN-13 candidate
//! - [`checksum::validate_and_normalize`] checks the mod 11 / mod 10 checksum and
//!   converts ISBN-10 into the 13-digit EAN form
//! - [`hyphenation::resolve`] finds segment boundaries in a registrant-range table
//!
//! [`Isbn`] wraps the result. Every stage is pure; the bundled range table is
//! immutable and shared, so parsing is safe from any number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use isbnkit_canonical::{ErrorKind, Isbn};
//!
//! let isbn: Isbn = "979-8421221814".parse()?;
//! assert_eq!(isbn.to_string(), "979-8-4212-2181-4");
//! assert_eq!(isbn.group_name(), "United States");
//!
//! assert!(Isbn::check("978-0-306-40615-8").is_none());
//! let err = Isbn::parse("978/0/306/40615/7").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
//! # Ok::<(), isbnkit_canonical::IsbnError>(())
//! ```
#![deny(missing_docs)]

/// Checksum validation and ISBN-10 to ISBN-13 conversion.
pub mod checksum;
/// Digit extraction from free-form text.
pub mod digits;
/// Segment lengths and range table resolution.
pub mod hyphenation;
/// The canonical ISBN value object.
pub mod isbn;
/// Error taxonomy.
pub mod validation;

pub use checksum::{ean13_check_digit, isbn10_check_digit, CanonicalDigits};
pub use digits::{Candidate, SEPARATORS};
pub use hyphenation::{Hyphenation, Resolved};
pub use isbn::{Isbn, AGENCY_NAME};
pub use isbnkit_ranges::{RangeLookup, RangeMatch, RangeTable};
pub use validation::{ErrorKind, IsbnError, IsbnFormat};
