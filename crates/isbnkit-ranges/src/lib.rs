//! Registrant-range tables for ISBN hyphenation.
//!
//! The International ISBN Agency publishes which prefixes are allocated to
//! registration groups and publishers, and how long each segment is. This
//! crate models that range message, validates it, and answers prefix lookups
//! through the [`RangeLookup`] contract used by `isbnkit-canonical`.
//!
//! ```rust
//! use isbnkit_ranges::{RangeLookup, RangeTable};
//!
//! let table = RangeTable::from_json_str(isbnkit_ranges::BUNDLED_RANGE_MESSAGE)?;
//! let digits = [9, 7, 9, 8, 4, 2, 1, 2, 2, 1, 8, 1, 4];
//! let found = table.lookup(&digits).expect("assigned range");
//! assert_eq!((found.group_len, found.publisher_len), (1, 4));
//! # Ok::<(), isbnkit_ranges::RangeError>(())
//! ```
#![deny(missing_docs)]

/// Bundled default table.
pub mod default;
/// Range table fingerprints.
pub mod digest;
/// Error types for range table loading.
pub mod errors;
/// Lookup contract shared with the parser.
pub mod lookup;
/// Serde model of the Agency's range message.
pub mod message;
/// Validated, prefix-indexed range table.
pub mod table;

pub use default::{default_table, BUNDLED_RANGE_MESSAGE};
pub use digest::{Digest, DigestAlg};
pub use errors::RangeError;
pub use lookup::{RangeLookup, RangeMatch};
pub use message::{PrefixRanges, RangeMessage, RangeRule};
pub use table::{GroupSummary, RangeTable};
