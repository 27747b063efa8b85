//! Ranges command implementation.

use chrono::{DateTime, Utc};
use isbnkit_ranges::{Digest, GroupSummary, RangeTable};
use serde::Serialize;

use super::CommandError;

#[derive(Debug, Serialize)]
struct RangesReport<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    serial_number: Option<&'a str>,
    message_date: DateTime<Utc>,
    group_count: usize,
    digest: &'a Digest,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<GroupSummary<'a>>>,
}

#[allow(clippy::print_literal)]
pub fn run(table: &RangeTable, groups: bool, json: bool) -> Result<(), CommandError> {
    let report = RangesReport {
        source: table.source(),
        serial_number: table.serial_number(),
        message_date: table.message_date(),
        group_count: table.group_count(),
        digest: table.digest(),
        groups: groups.then(|| table.groups().collect()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Source:       {}", report.source);
    if let Some(serial) = report.serial_number {
        println!("Serial:       {}", serial);
    }
    println!(
        "Date:         {}",
        report.message_date.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Groups:       {}", report.group_count);
    println!("Digest:       {}", report.digest);

    if let Some(groups) = &report.groups {
        println!();
        println!("{:<10} {}", "PREFIX", "NAME");
        println!("{}", "-".repeat(40));
        for group in groups {
            println!("{:<10} {}", group.prefix, group.name);
        }
    }
    Ok(())
}
