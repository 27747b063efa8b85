use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registrant-range message in the layout published by the International ISBN Agency.
///
/// This is the raw, unvalidated form. Convert it with
/// [`RangeTable::from_message`](crate::RangeTable::from_message) before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeMessage {
    /// Publisher of the message (normally the International ISBN Agency).
    pub source: String,
    /// Serial number assigned by the Agency, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Publication timestamp of the message.
    pub message_date: DateTime<Utc>,
    /// EAN.UCC prefixes (`978`, `979`) with rules giving the group length.
    pub ucc_prefixes: Vec<PrefixRanges>,
    /// Registration groups (`978-0`, `979-10`, ...) with rules giving the publisher length.
    pub registration_groups: Vec<PrefixRanges>,
}

/// One prefix element and its length rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRanges {
    /// Hyphenated prefix, e.g. `978` or `978-0`.
    pub prefix: String,
    /// Agency responsible for the prefix; for groups this is the group name.
    pub agency: String,
    /// Rules over the 7-digit window that follows the prefix.
    pub rules: Vec<RangeRule>,
}

/// A single `min-max` range with the segment length it assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRule {
    /// Inclusive range of 7-digit windows, formatted `0000000-1999999`.
    pub range: String,
    /// Segment length; `0` marks the range as not yet assigned.
    pub length: u8,
}
