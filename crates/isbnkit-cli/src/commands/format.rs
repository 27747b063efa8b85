//! Format command implementation.

use clap::ValueEnum;
use isbnkit_canonical::Isbn;
use isbnkit_ranges::RangeTable;

use super::CommandError;

/// Rendering styles for `isbn format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatStyle {
    /// 978-0-306-40615-7
    Hyphenated,
    /// 9780306406157
    Compact,
    /// 0306406152
    #[value(name = "isbn10")]
    Isbn10,
    /// 0-306-40615-2
    #[value(name = "isbn10-hyphenated")]
    Isbn10Hyphenated,
}

pub fn render(isbn: &Isbn, style: FormatStyle) -> Result<String, CommandError> {
    let rendered = match style {
        FormatStyle::Hyphenated => Some(isbn.to_string()),
        FormatStyle::Compact => Some(isbn.to_compact_string()),
        FormatStyle::Isbn10 => isbn.to_isbn10(),
        FormatStyle::Isbn10Hyphenated => isbn.to_hyphenated_isbn10(),
    };
    rendered.ok_or_else(|| CommandError::NoIsbn10 {
        isbn: isbn.to_string(),
    })
}

pub fn run(table: &RangeTable, input: &str, style: FormatStyle) -> Result<(), CommandError> {
    let isbn = Isbn::parse_with(input, table)?;
    println!("{}", render(&isbn, style)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_style() {
        let isbn = Isbn::parse("0-306-40615-2").unwrap();
        assert_eq!(render(&isbn, FormatStyle::Hyphenated).unwrap(), "978-0-306-40615-7");
        assert_eq!(render(&isbn, FormatStyle::Compact).unwrap(), "9780306406157");
        assert_eq!(render(&isbn, FormatStyle::Isbn10).unwrap(), "0306406152");
        assert_eq!(
            render(&isbn, FormatStyle::Isbn10Hyphenated).unwrap(),
            "0-306-40615-2"
        );
    }

    #[test]
    fn isbn10_styles_need_978() {
        let isbn = Isbn::parse("9798421221814").unwrap();
        let err = render(&isbn, FormatStyle::Isbn10).unwrap_err();
        assert!(matches!(err, CommandError::NoIsbn10 { .. }));
        assert_eq!(err.to_string(), "979-8-4212-2181-4 has no ISBN-10 form");
    }
}
