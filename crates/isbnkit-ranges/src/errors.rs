use thiserror::Error;

/// Errors raised while loading or validating a registrant-range table.
#[derive(Debug, Error)]
pub enum RangeError {
    /// I/O error while reading a range message file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The range message is not valid JSON or does not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// A value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A rule range is malformed, unsorted, or overlaps its predecessor.
    #[error("invalid range {range} under {prefix}: {reason}")]
    InvalidRange {
        /// Prefix element owning the rule.
        prefix: String,
        /// Offending range string.
        range: String,
        /// Why the range was rejected.
        reason: &'static str,
    },
    /// A rule length is out of bounds or leaves no room for a title segment.
    #[error("length {length} under {prefix} is out of bounds")]
    InvalidLength {
        /// Prefix element owning the rule.
        prefix: String,
        /// Offending length.
        length: u8,
    },
    /// The same prefix element appears twice.
    #[error("duplicate prefix {0}")]
    DuplicatePrefix(String),
    /// A registration group refers to a UCC prefix the message does not declare.
    #[error("registration group {0} has no matching UCC prefix")]
    UndeclaredPrefix(String),
    /// A registration group's length disagrees with its UCC prefix rules.
    #[error("registration group {0} does not match the group length of its UCC prefix")]
    GroupLengthMismatch(String),
    /// Canonical JSON encoding failed while computing the table digest.
    #[error("canonicalization failed: {0}")]
    Canonicalization(String),
}
