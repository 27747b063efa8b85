//! Check command implementation.

use isbnkit_canonical::Isbn;
use isbnkit_ranges::RangeTable;

use super::CommandError;
use crate::output::{self, CheckRecord};

pub fn run(
    table: &RangeTable,
    inputs: &[String],
    strict: bool,
    json: bool,
) -> Result<(), CommandError> {
    let results: Vec<_> = inputs
        .iter()
        .map(|input| (input.as_str(), Isbn::parse_with(input, table)))
        .collect();
    let records: Vec<_> = results
        .iter()
        .map(|(input, result)| CheckRecord::new(None, input, result))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        output::print_check_header(false);
        for record in &records {
            println!("{}", record.format_table_row());
        }
    }

    let count = records.iter().filter(|r| !r.valid).count();
    if strict && count > 0 {
        return Err(CommandError::InvalidInputs {
            count,
            total: records.len(),
        });
    }
    Ok(())
}
