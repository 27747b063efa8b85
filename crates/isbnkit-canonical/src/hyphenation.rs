use std::sync::Arc;

use isbnkit_ranges::RangeLookup;

use crate::checksum::CanonicalDigits;
use crate::validation::IsbnError;

/// Length of the EAN.UCC prefix (`978` or `979`).
pub const PREFIX_LEN: usize = 3;
/// Length of the check digit segment.
pub const CHECK_LEN: usize = 1;
/// Length of a canonical ISBN.
pub const ISBN_LEN: usize = 13;

/// Segment lengths of a hyphenated ISBN.
///
/// Prefix and check digit are fixed; the title length is whatever remains
/// after group and publisher. Every segment is at least one digit long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hyphenation {
    group_len: u8,
    publisher_len: u8,
}

impl Hyphenation {
    /// Builds a descriptor, or `None` if the lengths leave no title digit.
    pub fn new(group_len: u8, publisher_len: u8) -> Option<Self> {
        let used = PREFIX_LEN + usize::from(group_len) + usize::from(publisher_len) + CHECK_LEN;
        if group_len == 0 || publisher_len == 0 || used >= ISBN_LEN {
            return None;
        }
        Some(Self {
            group_len,
            publisher_len,
        })
    }

    /// Length of the prefix segment (always 3).
    pub fn prefix_len(&self) -> usize {
        PREFIX_LEN
    }

    /// Length of the registration group segment.
    pub fn group_len(&self) -> usize {
        usize::from(self.group_len)
    }

    /// Length of the registrant (publisher) segment.
    pub fn publisher_len(&self) -> usize {
        usize::from(self.publisher_len)
    }

    /// Length of the title (publication) segment.
    pub fn title_len(&self) -> usize {
        ISBN_LEN - PREFIX_LEN - self.group_len() - self.publisher_len() - CHECK_LEN
    }

    /// Length of the check digit segment (always 1).
    pub fn check_len(&self) -> usize {
        CHECK_LEN
    }

    /// Segment lengths in order: prefix, group, publisher, title, check.
    pub fn segments(&self) -> [usize; 5] {
        [
            self.prefix_len(),
            self.group_len(),
            self.publisher_len(),
            self.title_len(),
            self.check_len(),
        ]
    }

    /// Splits 13 compact digits into their five segments.
    pub(crate) fn split<'a>(&self, compact: &'a str) -> [&'a str; 5] {
        let mut parts = [""; 5];
        let mut rest = compact;
        for (part, len) in parts.iter_mut().zip(self.segments()) {
            let (head, tail) = rest.split_at(len);
            *part = head;
            rest = tail;
        }
        parts
    }
}

/// Result of a successful range lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Segment lengths.
    pub hyphenation: Hyphenation,
    /// Registration group name.
    pub group_name: Arc<str>,
}

/// Resolves segment boundaries for canonical digits.
///
/// # Errors
///
/// Returns [`IsbnError::UnassignedRange`] when the table has no allocation
/// for the prefix, or reports lengths that leave no title digit.
pub fn resolve<L>(digits: &CanonicalDigits, ranges: &L) -> Result<Resolved, IsbnError>
where
    L: RangeLookup + ?Sized,
{
    ranges
        .lookup(digits.as_ref())
        .and_then(|found| {
            let hyphenation = Hyphenation::new(found.group_len, found.publisher_len)?;
            Some(Resolved {
                hyphenation,
                group_name: found.group_name,
            })
        })
        .ok_or_else(|| IsbnError::UnassignedRange {
            digits: digits.to_compact_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::validate_and_normalize;
    use crate::digits::extract;
    use isbnkit_ranges::RangeMatch;

    /// Assigns fixed lengths to every 978 number.
    struct Fixed(u8, u8);

    impl RangeLookup for Fixed {
        fn lookup(&self, digits: &[u8]) -> Option<RangeMatch> {
            (digits[..3] == [9, 7, 8]).then(|| RangeMatch {
                group_len: self.0,
                publisher_len: self.1,
                group_name: Arc::from("Test group"),
            })
        }
    }

    fn canonical(input: &str) -> CanonicalDigits {
        validate_and_normalize(extract(input).unwrap()).unwrap()
    }

    #[test]
    fn segments_sum_to_thirteen() {
        let h = Hyphenation::new(1, 7).unwrap();
        assert_eq!(h.segments(), [3, 1, 7, 1, 1]);
        assert_eq!(h.segments().iter().sum::<usize>(), ISBN_LEN);
        let h = Hyphenation::new(5, 3).unwrap();
        assert_eq!(h.title_len(), 1);
    }

    #[test]
    fn new_rejects_degenerate_lengths() {
        assert!(Hyphenation::new(0, 3).is_none());
        assert!(Hyphenation::new(2, 0).is_none());
        assert!(Hyphenation::new(1, 8).is_none());
        assert!(Hyphenation::new(5, 4).is_none());
    }

    #[test]
    fn split_follows_segments() {
        let h = Hyphenation::new(1, 3).unwrap();
        assert_eq!(h.split("9780306406157"), ["978", "0", "306", "40615", "7"]);
    }

    #[test]
    fn resolve_uses_the_lookup() {
        let resolved = resolve(&canonical("9780306406157"), &Fixed(2, 4)).unwrap();
        assert_eq!(resolved.hyphenation, Hyphenation::new(2, 4).unwrap());
        assert_eq!(&*resolved.group_name, "Test group");
    }

    #[test]
    fn resolve_reports_unassigned_prefix() {
        let err = resolve(&canonical("9798421221814"), &Fixed(1, 4)).unwrap_err();
        assert_eq!(
            err,
            IsbnError::UnassignedRange {
                digits: "9798421221814".into()
            }
        );
    }

    #[test]
    fn resolve_rejects_lengths_without_title() {
        let err = resolve(&canonical("9780306406157"), &Fixed(1, 8)).unwrap_err();
        assert!(matches!(err, IsbnError::UnassignedRange { .. }));
    }
}
