//! Field access helpers for extractors

use super::extractor::ExtractionError;
use crate::app::models::RawRecord;

/// Get a required text field from a record
///
/// Empty values are returned as-is; only absent or non-text fields fail.
pub fn get_required_field<'a>(
    record: &'a RawRecord,
    field_name: &str,
) -> Result<&'a str, ExtractionError> {
    record
        .get_text(field_name)
        .ok_or_else(|| ExtractionError::missing_field(field_name))
}

/// Build the subject-anchored pattern used by the text grammars
///
/// The subject is matched literally, so names containing regex
/// metacharacters are safe.
pub fn subject_pattern(
    subject: &str,
    grammar: &str,
) -> Result<regex::Regex, ExtractionError> {
    let pattern = format!("{}{}", regex::escape(subject), grammar);
    regex::Regex::new(&pattern).map_err(|e| ExtractionError::InvalidPattern {
        subject: subject.to_string(),
        reason: e.to_string(),
    })
}
