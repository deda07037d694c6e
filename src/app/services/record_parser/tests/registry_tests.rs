//! Tests for the extractor registry

use super::*;
use crate::app::models::{ActivityKind, NormalizedRecord, RawRecord};
use crate::app::services::record_parser::{
    Categorizer, ExtractionError, Extractor, ExtractorRegistry,
};

/// Extractor that tags every row it sees
struct TaggingExtractor;

impl Extractor for TaggingExtractor {
    fn kind(&self) -> &str {
        "Weight"
    }

    fn extract(&self, record: &RawRecord) -> Result<NormalizedRecord, ExtractionError> {
        let mut tagged = record.clone();
        tagged.insert("tagged", true);
        Ok(tagged)
    }
}

#[test]
fn test_default_registry_kinds() {
    let registry = ExtractorRegistry::default();
    let kinds: Vec<&str> = registry
        .kinds()
        .into_iter()
        .map(ActivityKind::as_str)
        .collect();

    assert_eq!(kinds, vec!["diaper", "nursing"]);
    assert!(registry.is_registered(&ActivityKind::from_activity("Nursing")));
    assert!(!registry.is_registered(&ActivityKind::from_activity("sleep")));
}

#[test]
fn test_empty_registry_passes_everything_through() {
    let categorizer = Categorizer::new(ExtractorRegistry::empty());
    let row = create_nursing_row("Bob", "Bob nursed (10min)");

    let result = categorizer.categorize_with_stats(std::slice::from_ref(&row));
    assert_eq!(result.dataset.bucket("nursing").unwrap()[0], row);
    assert_eq!(result.stats.passed_through, 1);
}

#[test]
fn test_register_custom_extractor() {
    let mut registry = ExtractorRegistry::default();
    assert!(registry.register(Box::new(TaggingExtractor)).is_none());

    let categorizer = Categorizer::new(registry);
    let rows = vec![create_test_row("Weight", "Bob", "Bob weighed 10 lbs")];
    let dataset = categorizer.categorize(&rows);

    let weight = dataset.bucket("weight").unwrap();
    assert_eq!(weight[0].get("tagged").and_then(|v| v.as_bool()), Some(true));
}

#[test]
fn test_register_replaces_existing() {
    let mut registry = ExtractorRegistry::default();
    let previous = registry.register(Box::new(
        crate::app::services::record_parser::NursingExtractor,
    ));

    assert!(previous.is_some());
    assert_eq!(registry.kinds().len(), 2);
}

#[test]
fn test_registry_debug_lists_kinds() {
    let debug = format!("{:?}", ExtractorRegistry::default());
    assert!(debug.contains("diaper"));
    assert!(debug.contains("nursing"));
}
