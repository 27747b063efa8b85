use std::path::Path;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::digest::Digest;
use crate::errors::RangeError;
use crate::lookup::{RangeLookup, RangeMatch};
use crate::message::{PrefixRanges, RangeMessage};

/// Digits covered by every rule window.
const WINDOW_DIGITS: usize = 7;
const UCC_DIGITS: usize = 3;
/// Digits shared by group, publisher and title (13 minus prefix and check digit).
const BODY_DIGITS: usize = 9;
const MAX_GROUP_LEN: u8 = 5;

static UCC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^97[89]$").expect("invalid regex"));
static GROUP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(97[89])-([0-9]{1,5})$").expect("invalid regex"));
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{7})-([0-9]{7})$").expect("invalid regex"));

#[derive(Debug, Clone, Copy)]
struct Rule {
    min: u32,
    max: u32,
    length: u8,
}

#[derive(Debug)]
struct UccEntry {
    prefix: u16,
    rules: Vec<Rule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey {
    ucc: u16,
    len: u8,
    value: u32,
}

#[derive(Debug)]
struct GroupEntry {
    key: GroupKey,
    prefix: String,
    name: Arc<str>,
    rules: Vec<Rule>,
}

/// Registration group listed by [`RangeTable::groups`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSummary<'a> {
    /// Hyphenated group prefix, e.g. `978-0`.
    pub prefix: &'a str,
    /// Group name, e.g. `English language`.
    pub name: &'a str,
}

/// Validated, read-only registrant-range table.
///
/// Rules are kept sorted so every lookup is a handful of binary searches. The
/// table never changes after construction and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use isbnkit_ranges::{default_table, RangeLookup};
///
/// let digits = [9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5, 7];
/// let found = default_table().lookup(&digits).expect("assigned range");
/// assert_eq!((found.group_len, found.publisher_len), (1, 3));
/// assert_eq!(&*found.group_name, "English language");
/// ```
#[derive(Debug)]
pub struct RangeTable {
    source: String,
    serial_number: Option<String>,
    message_date: DateTime<Utc>,
    ucc: Vec<UccEntry>,
    groups: Vec<GroupEntry>,
    digest: Digest,
}

impl RangeTable {
    /// Validates a range message and builds the lookup structure.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if any prefix or range is malformed, rules
    /// overlap or are unsorted, a length leaves no room for a title segment,
    /// a prefix is duplicated, or a group has no matching UCC prefix.
    pub fn from_message(message: RangeMessage) -> Result<Self, RangeError> {
        let digest = fingerprint(&message)?;

        let mut ucc = Vec::with_capacity(message.ucc_prefixes.len());
        for element in &message.ucc_prefixes {
            ucc.push(UccEntry {
                prefix: parse_ucc_prefix(&element.prefix)?,
                rules: compile_rules(element, MAX_GROUP_LEN)?,
            });
        }
        ucc.sort_by_key(|entry| entry.prefix);
        if let Some(pair) = ucc.windows(2).find(|pair| pair[0].prefix == pair[1].prefix) {
            return Err(RangeError::DuplicatePrefix(pair[0].prefix.to_string()));
        }

        let mut groups = Vec::with_capacity(message.registration_groups.len());
        for element in &message.registration_groups {
            let (ucc_prefix, group_digits) = split_group_prefix(&element.prefix)?;
            let owner = ucc
                .binary_search_by_key(&ucc_prefix, |entry| entry.prefix)
                .map(|idx| &ucc[idx])
                .map_err(|_| RangeError::UndeclaredPrefix(element.prefix.clone()))?;

            let digits: Vec<u8> = group_digits.bytes().map(|b| b - b'0').collect();
            let len = digits.len() as u8;
            if find_length(&owner.rules, window(&digits)) != Some(len) {
                return Err(RangeError::GroupLengthMismatch(element.prefix.clone()));
            }

            // group + publisher must leave at least one title digit
            let max_publisher = BODY_DIGITS as u8 - 1 - len;
            groups.push(GroupEntry {
                key: GroupKey {
                    ucc: ucc_prefix,
                    len,
                    value: number(&digits),
                },
                prefix: element.prefix.clone(),
                name: Arc::from(element.agency.as_str()),
                rules: compile_rules(element, max_publisher)?,
            });
        }
        groups.sort_by_key(|group| group.key);
        if let Some(pair) = groups.windows(2).find(|pair| pair[0].key == pair[1].key) {
            return Err(RangeError::DuplicatePrefix(pair[0].prefix.clone()));
        }

        tracing::debug!(
            source = %message.source,
            ucc_prefixes = ucc.len(),
            groups = groups.len(),
            digest = %digest,
            "loaded registrant range table"
        );

        Ok(Self {
            source: message.source,
            serial_number: message.serial_number,
            message_date: message.message_date,
            ucc,
            groups,
            digest,
        })
    }

    /// Parses and validates a range message from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, RangeError> {
        let message: RangeMessage = serde_json::from_str(json)?;
        Self::from_message(message)
    }

    /// Reads, parses and validates a range message file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RangeError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading range message");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Publisher of the underlying range message.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Serial number of the underlying range message, when present.
    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }

    /// Publication timestamp of the underlying range message.
    pub fn message_date(&self) -> DateTime<Utc> {
        self.message_date
    }

    /// SHA-256 over the canonical JSON form of the range message.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Number of registration groups in the table.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Registration groups ordered by UCC prefix, then group length, then
    /// group number, so `978-7` comes before `978-600`.
    pub fn groups(&self) -> impl Iterator<Item = GroupSummary<'_>> {
        self.groups.iter().map(|group| GroupSummary {
            prefix: &group.prefix,
            name: &group.name,
        })
    }
}

impl RangeLookup for RangeTable {
    fn lookup(&self, digits: &[u8]) -> Option<RangeMatch> {
        if digits.len() != 13 || digits.iter().any(|&d| d > 9) {
            return None;
        }
        let ucc_prefix = number(&digits[..UCC_DIGITS]) as u16;
        let ucc = self
            .ucc
            .binary_search_by_key(&ucc_prefix, |entry| entry.prefix)
            .ok()
            .map(|idx| &self.ucc[idx])?;

        let body = &digits[UCC_DIGITS..UCC_DIGITS + BODY_DIGITS];
        let group_len = find_length(&ucc.rules, window(body))?;
        let (group_digits, rest) = body.split_at(group_len as usize);
        let key = GroupKey {
            ucc: ucc_prefix,
            len: group_len,
            value: number(group_digits),
        };
        let group = self
            .groups
            .binary_search_by_key(&key, |group| group.key)
            .ok()
            .map(|idx| &self.groups[idx])?;

        let publisher_len = find_length(&group.rules, window(rest))?;
        if usize::from(group_len + publisher_len) >= BODY_DIGITS {
            return None;
        }
        Some(RangeMatch {
            group_len,
            publisher_len,
            group_name: Arc::clone(&group.name),
        })
    }
}

fn fingerprint(message: &RangeMessage) -> Result<Digest, RangeError> {
    let value = serde_json::to_value(message)?;
    let canonical = canonical_json::to_string(&value)
        .map_err(|err| RangeError::Canonicalization(err.to_string()))?;
    Ok(Digest::sha256(canonical.as_bytes()))
}

fn parse_ucc_prefix(prefix: &str) -> Result<u16, RangeError> {
    if !UCC_PREFIX.is_match(prefix) {
        return Err(RangeError::PatternMismatch {
            field: "ucc_prefix",
            value: prefix.to_string(),
        });
    }
    prefix.parse().map_err(|_| RangeError::PatternMismatch {
        field: "ucc_prefix",
        value: prefix.to_string(),
    })
}

fn split_group_prefix(prefix: &str) -> Result<(u16, &str), RangeError> {
    let mismatch = || RangeError::PatternMismatch {
        field: "group_prefix",
        value: prefix.to_string(),
    };
    let caps = GROUP_PREFIX.captures(prefix).ok_or_else(mismatch)?;
    let ucc = caps[1].parse().map_err(|_| mismatch())?;
    let group = caps.get(2).map(|m| m.as_str()).ok_or_else(mismatch)?;
    Ok((ucc, group))
}

fn compile_rules(element: &PrefixRanges, max_len: u8) -> Result<Vec<Rule>, RangeError> {
    let mut rules: Vec<Rule> = Vec::with_capacity(element.rules.len());
    for rule in &element.rules {
        let mismatch = || RangeError::PatternMismatch {
            field: "range",
            value: rule.range.clone(),
        };
        let caps = RANGE.captures(&rule.range).ok_or_else(mismatch)?;
        let min: u32 = caps[1].parse().map_err(|_| mismatch())?;
        let max: u32 = caps[2].parse().map_err(|_| mismatch())?;
        let invalid = |reason| RangeError::InvalidRange {
            prefix: element.prefix.clone(),
            range: rule.range.clone(),
            reason,
        };

        if min > max {
            return Err(invalid("lower bound exceeds upper bound"));
        }
        if rules.last().is_some_and(|prev| prev.max >= min) {
            return Err(invalid("overlaps or precedes the previous range"));
        }
        if rule.length > max_len {
            return Err(RangeError::InvalidLength {
                prefix: element.prefix.clone(),
                length: rule.length,
            });
        }
        rules.push(Rule {
            min,
            max,
            length: rule.length,
        });
    }
    Ok(rules)
}

/// Length assigned to `value`, or `None` when no rule covers it or the rule is unassigned.
fn find_length(rules: &[Rule], value: u32) -> Option<u8> {
    let idx = rules.partition_point(|rule| rule.max < value);
    let rule = rules.get(idx)?;
    (rule.min <= value && rule.length > 0).then_some(rule.length)
}

/// The first seven digits as a number, right-padded with zeros.
fn window(digits: &[u8]) -> u32 {
    (0..WINDOW_DIGITS).fold(0, |acc, idx| {
        acc * 10 + u32::from(digits.get(idx).copied().unwrap_or(0))
    })
}

fn number(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, &digit| acc * 10 + u32::from(digit))
}
