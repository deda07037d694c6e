//! Tests for reading activity exports

use super::*;
use crate::app::services::activity_reader::ActivityReader;
use crate::error::BabyConnectError;
use std::path::Path;

#[test]
fn test_read_file_produces_symbolized_records() {
    let temp_file = create_temp_file(&create_test_export());
    let result = ActivityReader::new().read_file(temp_file.path()).unwrap();

    assert_eq!(result.records.len(), 4);
    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.stats.rows_read, 4);
    assert_eq!(result.stats.rows_skipped, 0);
    assert_eq!(
        result.columns,
        vec![
            "activity",
            "child_name",
            "start_time",
            "end_time",
            "duration",
            "text",
            "extra_data"
        ]
    );

    let nursing = &result.records[0];
    assert_eq!(nursing.get_text("activity"), Some("Nursing"));
    assert_eq!(nursing.get_text("child_name"), Some("Hazel"));
    assert_eq!(
        nursing.get_text("text"),
        Some("Hazel nursed (5min left, 3min)")
    );
    assert_eq!(nursing.get_text("extra_data"), Some(""));
    assert_eq!(
        nursing.keys().collect::<Vec<_>>(),
        result.columns.iter().map(String::as_str).collect::<Vec<_>>()
    );
}

#[test]
fn test_read_preserves_row_order() {
    let temp_file = create_temp_file(&create_test_export());
    let result = ActivityReader::new().read_file(temp_file.path()).unwrap();

    let activities: Vec<_> = result
        .records
        .iter()
        .map(|r| r.get_text("activity").unwrap())
        .collect();
    assert_eq!(activities, vec!["Nursing", "Diaper", "Sleep Start", "Weight"]);
}

#[test]
fn test_short_rows_lack_trailing_fields() {
    let content = "Activity,Child Name,Text,Start Time\nWeight,Ann\nDiaper,Ann,text,01/02/2012 08:00 AM,extra";
    let result = ActivityReader::new().read_from(content.as_bytes()).unwrap();

    assert_eq!(result.records.len(), 2);
    let short = &result.records[0];
    assert_eq!(short.len(), 2);
    assert!(!short.contains("text"));

    let long = &result.records[1];
    assert_eq!(long.len(), 4);
    assert_eq!(long.get_text("start_time"), Some("01/02/2012 08:00 AM"));
}

#[test]
fn test_invalid_utf8_rows_are_skipped() {
    let mut content = b"Activity,Child Name\nWeight,Ann\n".to_vec();
    content.extend_from_slice(b"Diaper,\xff\xfe\n");
    content.extend_from_slice(b"Sleep,Ann\n");

    let result = ActivityReader::new().read_from(content.as_slice()).unwrap();

    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.rows_read, 2);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert!(result.stats.errors[0].contains("row 2"));
}

#[test]
fn test_tab_delimited_export() {
    let content = "Activity\tChild Name\nNursing\tBob\n";
    let result = ActivityReader::new()
        .with_delimiter(b'\t')
        .read_from(content.as_bytes())
        .unwrap();

    assert_eq!(result.records[0].get_text("child_name"), Some("Bob"));
}

#[test]
fn test_empty_export() {
    let result = ActivityReader::new().read_from("".as_bytes()).unwrap();

    assert!(result.records.is_empty());
    assert_eq!(result.stats.success_rate(), 0.0);
}

#[test]
fn test_missing_file_fails_fast() {
    let result = ActivityReader::new().read_file(Path::new("/nonexistent/baby_connect.csv"));
    assert!(matches!(result, Err(BabyConnectError::InputNotFound { .. })));
}

#[test]
fn test_directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let result = ActivityReader::new().read_file(dir.path());
    assert!(matches!(
        result,
        Err(BabyConnectError::InputUnreadable { .. })
    ));
}

#[test]
fn test_duplicate_headers_keep_first_value() {
    let content = "Activity,Text,Child Name,Text!\nWeight,first,Hazel,second\n";
    let result = ActivityReader::new().read_from(content.as_bytes()).unwrap();

    let record = &result.records[0];
    assert_eq!(record.get_text("text"), Some("first"));
    assert_eq!(
        record.keys().collect::<Vec<_>>(),
        vec!["activity", "text", "child_name"]
    );
}
