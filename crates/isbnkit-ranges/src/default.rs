use std::sync::LazyLock;

use crate::table::RangeTable;

/// Range message bundled with the crate.
///
/// The 978 and 979 registration groups of the Agency's range message as of
/// its `message_date`. Load a newer export with [`RangeTable::from_path`] to
/// pick up later allocations.
pub const BUNDLED_RANGE_MESSAGE: &str = include_str!("../data/range_message.json");

static DEFAULT_TABLE: LazyLock<RangeTable> = LazyLock::new(|| {
    RangeTable::from_json_str(BUNDLED_RANGE_MESSAGE).expect("bundled range message is valid")
});

/// Returns the bundled range table, parsing it on first use.
pub fn default_table() -> &'static RangeTable {
    &DEFAULT_TABLE
}
