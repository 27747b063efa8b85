//! Batch command implementation.

use std::io::{self, BufRead, BufReader};
use std::path::Path;

use isbnkit_canonical::Isbn;
use isbnkit_ranges::RangeTable;

use super::CommandError;
use crate::output::{self, CheckRecord};

pub fn run(
    table: &RangeTable,
    input: Option<&Path>,
    json: bool,
    strict: bool,
) -> Result<(), CommandError> {
    // Read lines from file or stdin
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    if !json {
        output::print_check_header(true);
    }

    let mut total = 0usize;
    let mut invalid = 0usize;
    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        // undecodable bytes become U+FFFD, which the parser rejects
        let line = String::from_utf8_lossy(&bytes);
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let result = Isbn::parse_with(line, table);
        let record = CheckRecord::new(Some(idx + 1), line, &result);
        total += 1;
        if !record.valid {
            invalid += 1;
        }

        if json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{}", record.format_table_row());
        }
    }

    tracing::info!(total, invalid, "batch complete");
    if !json {
        println!();
        println!("{} checked, {} valid, {} invalid", total, total - invalid, invalid);
    }

    if strict && invalid > 0 {
        return Err(CommandError::InvalidInputs {
            count: invalid,
            total,
        });
    }
    Ok(())
}
