use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use isbnkit_ranges::{default_table, RangeLookup};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum::{isbn10_check_digit, validate_and_normalize, CanonicalDigits};
use crate::digits::extract;
use crate::hyphenation::{resolve, Hyphenation, Resolved};
use crate::validation::IsbnError;

/// Agency name reported for every resolved ISBN.
pub const AGENCY_NAME: &str = "International ISBN Agency";

/// A validated ISBN in canonical 13-digit form.
///
/// Equality, hashing and ordering use the 13 digits only: an ISBN-10 and
/// its ISBN-13 conversion are the same value, and the hyphenation is a
/// presentation detail.
///
/// # Example
///
/// ```rust
/// use isbnkit_canonical::Isbn;
///
/// let isbn = Isbn::parse("0-306-40615-2")?;
/// assert_eq!(isbn.to_string(), "978-0-306-40615-7");
/// assert_eq!(isbn.to_compact_string(), "9780306406157");
/// assert_eq!(isbn.publisher(), "306");
/// assert_eq!(isbn, Isbn::parse("978-0306406157")?);
/// # Ok::<(), isbnkit_canonical::IsbnError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Isbn {
    digits: CanonicalDigits,
    compact: String,
    hyphenation: Hyphenation,
    group_name: Arc<str>,
}

impl Isbn {
    /// Parses an ISBN-10 or ISBN-13 against the bundled range table.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`IsbnError`] format kind that rejected the input.
    pub fn parse(input: &str) -> Result<Self, IsbnError> {
        Self::parse_with(input, default_table())
    }

    /// Like [`Isbn::parse`], but reports [`IsbnError::MissingInput`] for `None`.
    pub fn parse_optional(input: Option<&str>) -> Result<Self, IsbnError> {
        let input = input.ok_or(IsbnError::MissingInput)?;
        Self::parse(input)
    }

    /// Parses against a caller-supplied range table.
    pub fn parse_with<L>(input: &str, ranges: &L) -> Result<Self, IsbnError>
    where
        L: RangeLookup + ?Sized,
    {
        let result = Self::build(input.trim(), ranges);
        if let Err(err) = &result {
            tracing::debug!(input, kind = %err.kind(), error = %err, "rejected ISBN");
        }
        result
    }

    /// Returns the parsed ISBN, or `None` for any failure.
    pub fn check(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Like [`Isbn::check`], against a caller-supplied range table.
    pub fn check_with<L>(input: &str, ranges: &L) -> Option<Self>
    where
        L: RangeLookup + ?Sized,
    {
        Self::parse_with(input, ranges).ok()
    }

    /// True when `input` is a valid, assigned ISBN.
    pub fn is_valid(input: &str) -> bool {
        Self::check(input).is_some()
    }

    fn build<L>(input: &str, ranges: &L) -> Result<Self, IsbnError>
    where
        L: RangeLookup + ?Sized,
    {
        let candidate = extract(input)?;
        let digits = validate_and_normalize(candidate)?;
        let Resolved {
            hyphenation,
            group_name,
        } = resolve(&digits, ranges)?;
        Ok(Self {
            compact: digits.to_compact_string(),
            digits,
            hyphenation,
            group_name,
        })
    }

    fn segment(&self, idx: usize) -> &str {
        self.hyphenation.split(&self.compact)[idx]
    }

    /// EAN.UCC prefix, `978` or `979`.
    pub fn prefix(&self) -> &str {
        self.segment(0)
    }

    /// Name of the agency that administers the prefix.
    pub fn agency_name(&self) -> &'static str {
        AGENCY_NAME
    }

    /// Registration group identifier, e.g. `0` or `84`.
    pub fn group(&self) -> &str {
        self.segment(1)
    }

    /// Prefix and group, hyphenated: `978-0`.
    pub fn group_prefix(&self) -> String {
        format!("{}-{}", self.prefix(), self.group())
    }

    /// Registration group name, e.g. `English language`.
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Registrant (publisher) identifier.
    pub fn publisher(&self) -> &str {
        self.segment(2)
    }

    /// Prefix, group and publisher, hyphenated: `978-0-306`.
    pub fn publisher_prefix(&self) -> String {
        format!("{}-{}", self.group_prefix(), self.publisher())
    }

    /// Title (publication) identifier.
    pub fn title(&self) -> &str {
        self.segment(3)
    }

    /// EAN-13 check digit.
    pub fn check_digit(&self) -> char {
        char::from(b'0' + self.digits.as_array()[12])
    }

    /// The 13 digits without separators.
    pub fn as_compact_str(&self) -> &str {
        &self.compact
    }

    /// The 13 digits without separators, owned.
    pub fn to_compact_string(&self) -> String {
        self.compact.clone()
    }

    /// Canonical digit values.
    pub fn digits(&self) -> &CanonicalDigits {
        &self.digits
    }

    /// Segment lengths used for hyphenation.
    pub fn hyphenation(&self) -> Hyphenation {
        self.hyphenation
    }

    /// Legacy ISBN-10 form, available only for the `978` prefix.
    pub fn to_isbn10(&self) -> Option<String> {
        let check = self.isbn10_check()?;
        Some(format!("{}{}", &self.compact[3..12], check))
    }

    /// Hyphenated legacy ISBN-10 form, available only for the `978` prefix.
    pub fn to_hyphenated_isbn10(&self) -> Option<String> {
        let check = self.isbn10_check()?;
        Some(format!(
            "{}-{}-{}-{}",
            self.group(),
            self.publisher(),
            self.title(),
            check
        ))
    }

    fn isbn10_check(&self) -> Option<char> {
        if self.prefix() != "978" {
            return None;
        }
        let mut body = [0u8; 9];
        body.copy_from_slice(&self.digits.as_array()[3..12]);
        Some(match isbn10_check_digit(&body) {
            10 => 'X',
            d => char::from(b'0' + d),
        })
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [prefix, group, publisher, title, check] = self.hyphenation.split(&self.compact);
        write!(f, "{prefix}-{group}-{publisher}-{title}-{check}")
    }
}

impl PartialEq for Isbn {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for Isbn {}

impl Hash for Isbn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl PartialOrd for Isbn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Isbn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits.cmp(&other.digits)
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = IsbnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.compact
    }
}

impl Serialize for Isbn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.compact)
    }
}

impl<'de> Deserialize<'de> for Isbn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Isbn::parse(&text).map_err(serde::de::Error::custom)
    }
}
