//! Timestamp normalization shared by the extractors
//!
//! Baby Connect exports timestamps in the locale of the exporting device,
//! most commonly `12/04/2011 10:05 PM`. Every recognized form is rewritten to
//! `YYYY-MM-DD HH:MM:SS` without any timezone conversion: when the input
//! carries an offset, its wall-clock time is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::extractor::ExtractionError;
use super::field_parsers::get_required_field;
use crate::app::models::Record;
use crate::constants::{
    CANONICAL_DATETIME_FORMAT, DATE_ONLY_FORMATS, NAIVE_DATETIME_FORMATS,
    OFFSET_DATETIME_FORMATS, fields,
};

/// Parse a date-time in any of the accepted forms
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Some(dt.naive_local());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.naive_local());
    }

    // "12/04/2011, 10:05 PM"
    let cleaned = trimmed.replacen(',', "", 1);

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, format) {
            return Some(dt);
        }
    }
    DATE_ONLY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Rewrite a date-time string in canonical `YYYY-MM-DD HH:MM:SS` form
pub fn normalize_timestamp(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format(CANONICAL_DATETIME_FORMAT).to_string())
}

/// Normalize `start_time` and `end_time` in place
///
/// Both fields must be present and parseable.
pub fn normalize_timestamp_fields(record: &mut Record) -> Result<(), ExtractionError> {
    for field in fields::TIMESTAMP_FIELDS {
        let value = get_required_field(record, field)?;
        let normalized =
            normalize_timestamp(value).ok_or_else(|| ExtractionError::InvalidTimestamp {
                field: field.to_string(),
                value: value.to_string(),
            })?;
        record.insert(*field, normalized);
    }
    Ok(())
}
