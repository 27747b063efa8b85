//! Parse command implementation.

use isbnkit_canonical::{Isbn, IsbnError};
use isbnkit_ranges::RangeTable;

use super::CommandError;
use crate::output::IsbnReport;

pub fn run(table: &RangeTable, input: Option<&str>, json: bool) -> Result<(), CommandError> {
    let input = input.ok_or(IsbnError::MissingInput)?;
    let isbn = Isbn::parse_with(input, table)?;
    let report = IsbnReport::from(&isbn);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_text();
    }
    Ok(())
}
