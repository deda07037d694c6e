//! Tests for record categorization and text extraction
//!
//! Fixtures mirror rows as produced by the activity reader: every value is
//! text and keys are symbolized column names.

pub mod registry_tests;

use crate::app::models::RawRecord;

/// Create a row with the columns every Baby Connect export carries
pub fn create_test_row(activity: &str, child_name: &str, text: &str) -> RawRecord {
    RawRecord::from_pairs([
        ("activity", activity),
        ("child_name", child_name),
        ("start_time", "12/04/2011 10:05 PM"),
        ("end_time", "12/04/2011 10:20 PM"),
        ("duration", "15"),
        ("text", text),
        ("extra_data", ""),
    ])
}

pub fn create_nursing_row(child_name: &str, text: &str) -> RawRecord {
    create_test_row("Nursing", child_name, text)
}

pub fn create_diaper_row(child_name: &str, text: &str) -> RawRecord {
    create_test_row("Diaper", child_name, text)
}
