use std::fs;

use isbnkit_ranges::{
    default_table, DigestAlg, PrefixRanges, RangeError, RangeLookup, RangeMessage, RangeRule,
    RangeTable, BUNDLED_RANGE_MESSAGE,
};
use serde_json::json;
use tempfile::TempDir;

fn digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

#[test]
fn bundled_table_loads() {
    let table = default_table();
    assert_eq!(table.source(), "International ISBN Agency");
    assert_eq!(table.digest().alg, DigestAlg::Sha256);
    assert!(table.group_count() >= 240);
    assert!(table
        .groups()
        .any(|g| g.prefix == "979-8" && g.name == "United States"));
}

#[test]
fn bundled_table_resolves_known_isbns() {
    let table = default_table();
    let cases = [
        ("9780639963549", 1, 7, "English language"),
        ("9783947188345", 1, 6, "German language"),
        ("9798421221814", 1, 4, "United States"),
        ("9781492067665", 1, 4, "English language"),
        ("9788412345674", 2, 2, "Spain"),
    ];
    for (isbn, group_len, publisher_len, name) in cases {
        let found = table
            .lookup(&digits(isbn))
            .unwrap_or_else(|| panic!("{isbn} should be assigned"));
        assert_eq!(found.group_len, group_len, "{isbn}");
        assert_eq!(found.publisher_len, publisher_len, "{isbn}");
        assert_eq!(&*found.group_name, name, "{isbn}");
    }
}

#[test]
fn bundled_table_covers_every_registration_group() {
    let table = default_table();
    let cases = [
        ("9788954642835", 2, 3, "Korea, Republic"),
        ("9788561000004", 2, 5, "Brazil"),
        ("9786550000004", 2, 4, "Brazil"),
        ("9789170000003", 2, 4, "Sweden"),
        ("9789200000003", 2, 1, "International NGO Publishers and EU Organizations"),
        ("9786000000004", 3, 2, "Iran"),
        ("9789932000005", 4, 2, "Lao People's Democratic Republic"),
        ("9789992100004", 5, 1, "Qatar"),
        ("9791300000005", 2, 2, "Spain"),
    ];
    for (isbn, group_len, publisher_len, name) in cases {
        let found = table
            .lookup(&digits(isbn))
            .unwrap_or_else(|| panic!("{isbn} should be assigned"));
        assert_eq!(
            (found.group_len, found.publisher_len),
            (group_len, publisher_len),
            "{isbn}"
        );
        assert_eq!(&*found.group_name, name, "{isbn}");
    }
}

#[test]
fn bundled_groups_are_ordered_by_length_before_number() {
    let prefixes: Vec<_> = default_table().groups().map(|g| g.prefix).collect();
    let position = |prefix: &str| prefixes.iter().position(|p| *p == prefix).unwrap();
    assert_eq!(prefixes.first(), Some(&"978-0"));
    assert!(position("978-7") < position("978-600"));
    assert!(position("978-99996") < position("979-8"));
    assert!(position("979-8") < position("979-10"));
}

#[test]
fn bundled_table_rejects_unallocated_prefixes() {
    let table = default_table();
    // 979-0 is reserved for music (ISMN)
    assert!(table.lookup(&digits("9790000000001")).is_none());
    // 978-610 has a three-digit group length but no allocation
    assert!(table.lookup(&digits("9786100000003")).is_none());
    // unassigned publisher ranges inside 979-8
    assert!(table.lookup(&digits("9798900000008")).is_none());
    assert!(table.lookup(&digits("9798000000000")).is_none());
}

#[test]
fn digest_ignores_json_formatting() {
    let value: serde_json::Value = serde_json::from_str(BUNDLED_RANGE_MESSAGE).unwrap();
    let compact = serde_json::to_string(&value).unwrap();
    let reformatted = RangeTable::from_json_str(&compact).unwrap();
    assert_eq!(reformatted.digest(), default_table().digest());
}

#[test]
fn digest_changes_with_content() {
    let mut message: RangeMessage = serde_json::from_str(BUNDLED_RANGE_MESSAGE).unwrap();
    message.serial_number = Some("test-serial".into());
    let table = RangeTable::from_message(message).unwrap();
    assert_ne!(table.digest(), default_table().digest());
    assert_eq!(table.serial_number(), Some("test-serial"));
}

#[test]
fn message_serializes_to_golden_json() {
    let element = PrefixRanges {
        prefix: "978".into(),
        agency: "International ISBN Agency".into(),
        rules: vec![RangeRule {
            range: "0000000-5999999".into(),
            length: 1,
        }],
    };

    assert_eq!(
        serde_json::to_value(&element).unwrap(),
        json!({
            "prefix": "978",
            "agency": "International ISBN Agency",
            "rules": [{ "range": "0000000-5999999", "length": 1 }]
        })
    );
}

#[test]
fn from_path_reads_range_message_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ranges.json");
    fs::write(&path, BUNDLED_RANGE_MESSAGE).unwrap();

    let table = RangeTable::from_path(&path).unwrap();
    assert_eq!(table.digest(), default_table().digest());
    assert_eq!(table.message_date(), default_table().message_date());
}

#[test]
fn from_path_reports_io_and_json_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = RangeTable::from_path(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, RangeError::Io(_)));

    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ \"source\": ").unwrap();
    let broken = RangeTable::from_path(&path).unwrap_err();
    assert!(matches!(broken, RangeError::Json(_)));
}
