//! Output formatting utilities.

use isbnkit_canonical::{Isbn, IsbnError};
use serde::Serialize;

/// Every component of a parsed ISBN.
#[derive(Debug, Serialize)]
pub struct IsbnReport<'a> {
    pub isbn: &'a str,
    pub hyphenated: String,
    pub prefix: &'a str,
    pub agency: &'a str,
    pub group: &'a str,
    pub group_prefix: String,
    pub group_name: &'a str,
    pub publisher: &'a str,
    pub publisher_prefix: String,
    pub title: &'a str,
    pub check_digit: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn10: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn10_hyphenated: Option<String>,
}

impl<'a> From<&'a Isbn> for IsbnReport<'a> {
    fn from(isbn: &'a Isbn) -> Self {
        IsbnReport {
            isbn: isbn.as_compact_str(),
            hyphenated: isbn.to_string(),
            prefix: isbn.prefix(),
            agency: isbn.agency_name(),
            group: isbn.group(),
            group_prefix: isbn.group_prefix(),
            group_name: isbn.group_name(),
            publisher: isbn.publisher(),
            publisher_prefix: isbn.publisher_prefix(),
            title: isbn.title(),
            check_digit: isbn.check_digit(),
            isbn10: isbn.to_isbn10(),
            isbn10_hyphenated: isbn.to_hyphenated_isbn10(),
        }
    }
}

impl IsbnReport<'_> {
    /// Prints the report as aligned `key: value` lines.
    pub fn print_text(&self) {
        let rows = [
            ("ISBN", self.isbn.to_string()),
            ("Hyphenated", self.hyphenated.clone()),
            ("Prefix", self.prefix.to_string()),
            ("Agency", self.agency.to_string()),
            ("Group", format!("{} ({})", self.group, self.group_name)),
            ("Group prefix", self.group_prefix.clone()),
            ("Publisher", self.publisher.to_string()),
            ("Publisher prefix", self.publisher_prefix.clone()),
            ("Title", self.title.to_string()),
            ("Check digit", self.check_digit.to_string()),
            ("ISBN-10", self.isbn10.clone().unwrap_or_else(|| "-".into())),
            (
                "ISBN-10 hyphenated",
                self.isbn10_hyphenated.clone().unwrap_or_else(|| "-".into()),
            ),
        ];
        for (key, value) in rows {
            println!("{:<20}{}", format!("{key}:"), value);
        }
    }
}

/// Outcome of checking a single input.
#[derive(Debug, Serialize)]
pub struct CheckRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub input: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyphenated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'a> CheckRecord<'a> {
    pub fn new(line: Option<usize>, input: &'a str, result: &Result<Isbn, IsbnError>) -> Self {
        match result {
            Ok(isbn) => CheckRecord {
                line,
                input,
                valid: true,
                isbn: Some(isbn.to_compact_string()),
                hyphenated: Some(isbn.to_string()),
                error: None,
                message: None,
            },
            Err(err) => CheckRecord {
                line,
                input,
                valid: false,
                isbn: None,
                hyphenated: None,
                error: Some(err.kind().as_str()),
                message: Some(err.to_string()),
            },
        }
    }

    /// Formats the record as a table row.
    pub fn format_table_row(&self) -> String {
        let status = if self.valid { "VALID" } else { "INVALID" };
        let detail = self
            .hyphenated
            .as_deref()
            .or(self.error)
            .unwrap_or("?");
        match self.line {
            Some(line) => format!(
                "{:<6} {:<24} {:<8} {}",
                line,
                truncate(self.input, 24),
                status,
                detail
            ),
            None => format!("{:<24} {:<8} {}", truncate(self.input, 24), status, detail),
        }
    }
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_check_header(with_line: bool) {
    if with_line {
        println!("{:<6} {:<24} {:<8} {}", "LINE", "INPUT", "STATUS", "RESULT");
        println!("{}", "-".repeat(60));
    } else {
        println!("{:<24} {:<8} {}", "INPUT", "STATUS", "RESULT");
        println!("{}", "-".repeat(53));
    }
}

/// Shortens `s` to at most `max_len` characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("9780306406157", 24), "9780306406157");
        assert_eq!(truncate("978\u{2013}0\u{2013}306\u{2013}40615\u{2013}7", 8), "978\u{2013}0...");
    }

    #[test]
    fn check_record_rows() {
        let ok = Isbn::parse("0306406152");
        let row = CheckRecord::new(None, "0306406152", &ok).format_table_row();
        assert!(row.contains("VALID"));
        assert!(row.ends_with("978-0-306-40615-7"));

        let bad = Isbn::parse("0306406153");
        let record = CheckRecord::new(Some(3), "0306406153", &bad);
        assert!(!record.valid);
        assert_eq!(record.error, Some("checksum_mismatch"));
        assert!(record.format_table_row().starts_with("3 "));
    }
}
