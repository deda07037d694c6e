//! Nursing record extraction
//!
//! Nursing rows describe the feed as `"<child> nursed (<breakdown>)"`, where
//! the breakdown lists minutes per side: `"5min left, 3min right"`. Entries
//! without a side are split evenly between both sides.

use tracing::trace;

use super::extractor::{ExtractionError, Extractor};
use super::field_parsers::{get_required_field, subject_pattern};
use super::timestamps::normalize_timestamp_fields;
use crate::app::models::{NormalizedRecord, RawRecord};
use crate::constants::{NURSING_ACTIVITY, fields};

/// Accumulated nursing minutes per side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SideTotals {
    pub left: f64,
    pub right: f64,
}

impl SideTotals {
    pub fn total(&self) -> f64 {
        self.left + self.right
    }

    fn add_entry(&mut self, entry: &str) -> Result<(), ExtractionError> {
        let mut parts = entry.split_whitespace();
        let Some(duration) = parts.next() else {
            return Ok(());
        };

        let minutes = duration
            .trim_end_matches("min")
            .parse::<u32>()
            .map_err(|e| ExtractionError::invalid_entry(NURSING_ACTIVITY, entry, e.to_string()))?
            as f64;

        match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None => {
                self.left += minutes / 2.0;
                self.right += minutes / 2.0;
            }
            Some("left") => self.left += minutes,
            Some("right") => self.right += minutes,
            Some(other) => {
                return Err(ExtractionError::invalid_entry(
                    NURSING_ACTIVITY,
                    entry,
                    format!("unknown side '{}'", other),
                ));
            }
        }
        Ok(())
    }
}

/// Parse the per-side breakdown out of a nursing description
///
/// `"Hazel nursed (5min left, 3min)"` yields left 6.5 and right 1.5.
pub fn parse_nursing_text(child_name: &str, text: &str) -> Result<SideTotals, ExtractionError> {
    let pattern = subject_pattern(child_name, r" nursed \((.*)\)")?;
    let breakdown = pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ExtractionError::grammar_mismatch(NURSING_ACTIVITY, text))?
        .as_str();

    let mut totals = SideTotals::default();
    for entry in breakdown.split(',') {
        totals.add_entry(entry)?;
    }

    trace!(
        "Nursing breakdown '{}' -> left={} right={}",
        breakdown, totals.left, totals.right
    );
    Ok(totals)
}

/// Enrich a nursing row with per-side minutes
///
/// Normalizes the timestamps, adds `left_side` and `right_side`, and drops the
/// `duration` and `extra_data` fields the breakdown supersedes.
pub fn parse_nursing(record: &RawRecord) -> Result<NormalizedRecord, ExtractionError> {
    let child_name = get_required_field(record, fields::CHILD_NAME)?;
    let text = get_required_field(record, fields::TEXT)?;
    let totals = parse_nursing_text(child_name, text)?;

    let mut normalized = record.clone();
    normalize_timestamp_fields(&mut normalized)?;
    normalized.insert(fields::LEFT_SIDE, totals.left);
    normalized.insert(fields::RIGHT_SIDE, totals.right);
    normalized.remove(fields::DURATION);
    normalized.remove(fields::EXTRA_DATA);

    Ok(normalized)
}

/// Extractor for `nursing` rows
#[derive(Debug, Clone, Copy, Default)]
pub struct NursingExtractor;

impl Extractor for NursingExtractor {
    fn kind(&self) -> &str {
        NURSING_ACTIVITY
    }

    fn extract(&self, record: &RawRecord) -> Result<NormalizedRecord, ExtractionError> {
        parse_nursing(record)
    }
}
