//! Subcommand implementations.

use std::ops::Deref;
use std::path::Path;

use isbnkit_canonical::IsbnError;
use isbnkit_ranges::{default_table, RangeError, RangeTable};
use thiserror::Error;

pub mod batch;
pub mod check;
pub mod format;
pub mod parse;
pub mod ranges;

/// Errors reported by any subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0} ({kind})", kind = .0.kind())]
    Isbn(#[from] IsbnError),
    #[error("failed to load range table: {0}")]
    Ranges(#[from] RangeError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{isbn} has no ISBN-10 form")]
    NoIsbn10 { isbn: String },
    #[error("{count} of {total} inputs are not valid ISBNs")]
    InvalidInputs { count: usize, total: usize },
}

/// Range table selected by the global `--ranges` flag.
#[derive(Debug)]
pub enum Table {
    Bundled(&'static RangeTable),
    Loaded(RangeTable),
}

impl Deref for Table {
    type Target = RangeTable;

    fn deref(&self) -> &RangeTable {
        match self {
            Table::Bundled(table) => table,
            Table::Loaded(table) => table,
        }
    }
}

/// Loads the range table from `path`, or returns the bundled one.
pub fn load_table(path: Option<&Path>) -> Result<Table, CommandError> {
    let Some(path) = path else {
        return Ok(Table::Bundled(default_table()));
    };
    let table = RangeTable::from_path(path)?;
    tracing::info!(
        path = %path.display(),
        groups = table.group_count(),
        digest = %table.digest(),
        "loaded range table"
    );
    Ok(Table::Loaded(table))
}
