//! Tests for per-activity export

mod writer_tests;

use crate::app::models::{ActivityKind, CategorizedDataset, FieldValue, Record};

/// An enriched nursing record as produced by the categorizer
pub fn create_enriched_nursing() -> Record {
    let mut record = Record::from_pairs([
        ("activity", "Nursing"),
        ("child_name", "Hazel"),
        ("start_time", "2011-12-04 22:05:00"),
        ("text", "Hazel nursed (5min left, 3min)"),
    ]);
    record.insert("left_side", 6.5);
    record.insert("right_side", 1.5);
    record
}

/// A small dataset with an enriched and a passthrough bucket
pub fn create_test_dataset() -> CategorizedDataset {
    let mut dataset = CategorizedDataset::new();
    dataset.push(ActivityKind::from_activity("Nursing"), create_enriched_nursing());
    dataset.push(
        ActivityKind::from_activity("Weight"),
        Record::from_pairs([("activity", "Weight"), ("text", "Hazel weighed 10 lbs")]),
    );
    let mut diaper = Record::from_pairs([("activity", "Diaper")]);
    diaper.insert("leak", true);
    diaper.insert("color", FieldValue::Null);
    dataset.push(ActivityKind::from_activity("Diaper"), diaper);
    dataset
}
