use std::sync::Arc;

/// Segment lengths resolved for a 13-digit ISBN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatch {
    /// Length of the registration group segment (1-5 digits).
    pub group_len: u8,
    /// Length of the registrant (publisher) segment.
    pub publisher_len: u8,
    /// Name of the registration group, e.g. `English language`.
    pub group_name: Arc<str>,
}

/// Query contract for registrant-range data.
///
/// Implementations receive the 13 canonical digit values (0-9, most significant
/// first) and answer with the group and publisher lengths, or `None` when the
/// prefix has not been allocated by the Agency.
pub trait RangeLookup {
    /// Looks up the segment lengths for `digits`.
    fn lookup(&self, digits: &[u8]) -> Option<RangeMatch>;
}

impl<T: RangeLookup + ?Sized> RangeLookup for &T {
    fn lookup(&self, digits: &[u8]) -> Option<RangeMatch> {
        (**self).lookup(digits)
    }
}

impl<T: RangeLookup + ?Sized> RangeLookup for Arc<T> {
    fn lookup(&self, digits: &[u8]) -> Option<RangeMatch> {
        (**self).lookup(digits)
    }
}
