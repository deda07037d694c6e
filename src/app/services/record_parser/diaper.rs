//! Diaper record extraction
//!
//! Diaper rows read `"<child> had a <type> diaper (<attributes>)"`. The type is
//! kept verbatim ("wet", "dirty", "wet and dirty"); attributes are looked up
//! in a fixed table and sorted into color, consistency, quantity and the leak
//! and open-air-accident flags. Unknown attributes are ignored.

use super::extractor::{ExtractionError, Extractor};
use super::field_parsers::{get_required_field, subject_pattern};
use super::timestamps::normalize_timestamp_fields;
use crate::app::models::{FieldValue, NormalizedRecord, RawRecord};
use crate::config::OpenAirAccidentRepr;
use crate::constants::{DIAPER_ACTIVITY, DiaperAttribute, classify_diaper_attribute, fields};

/// Attributes parsed from a diaper description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiaperDetails {
    pub diaper_type: String,
    pub color: Option<String>,
    pub consistency: Option<String>,
    pub quantity: Option<String>,
    pub leak: bool,
    pub open_air_accident: bool,
}

impl DiaperDetails {
    /// Merge the six derived fields into a record
    ///
    /// Existing fields of the same name are overwritten in place; the rest are
    /// appended as color, consistency, leak, open_air_accident, quantity, type.
    pub fn apply_to(&self, record: &mut NormalizedRecord, repr: OpenAirAccidentRepr) {
        let open_air_accident = match (repr, self.open_air_accident) {
            (OpenAirAccidentRepr::Phrase, true) => FieldValue::from("open air accident"),
            (_, flag) => FieldValue::Bool(flag),
        };

        record.insert(fields::COLOR, self.color.clone());
        record.insert(fields::CONSISTENCY, self.consistency.clone());
        record.insert(fields::LEAK, self.leak);
        record.insert(fields::OPEN_AIR_ACCIDENT, open_air_accident);
        record.insert(fields::QUANTITY, self.quantity.clone());
        record.insert(fields::TYPE, self.diaper_type.clone());
    }
}

/// Parse type and attributes out of a diaper description
///
/// When a category appears more than once the last phrase wins.
pub fn parse_diaper_text(child_name: &str, text: &str) -> Result<DiaperDetails, ExtractionError> {
    let pattern = subject_pattern(child_name, r" had a (.*) diaper \((.*)\)")?;
    let caps = pattern
        .captures(text)
        .ok_or_else(|| ExtractionError::grammar_mismatch(DIAPER_ACTIVITY, text))?;

    let mut details = DiaperDetails {
        diaper_type: caps[1].to_string(),
        ..Default::default()
    };

    for phrase in caps[2].split(',').map(str::trim) {
        match classify_diaper_attribute(phrase) {
            Some(DiaperAttribute::Consistency) => details.consistency = Some(phrase.to_string()),
            Some(DiaperAttribute::Quantity) => details.quantity = Some(phrase.to_string()),
            Some(DiaperAttribute::Color) => details.color = Some(phrase.to_string()),
            Some(DiaperAttribute::Leak) => details.leak = true,
            Some(DiaperAttribute::OpenAirAccident) => details.open_air_accident = true,
            None => {}
        }
    }

    Ok(details)
}

/// Enrich a diaper row with its type and classified attributes
pub fn parse_diaper(
    record: &RawRecord,
    repr: OpenAirAccidentRepr,
) -> Result<NormalizedRecord, ExtractionError> {
    let child_name = get_required_field(record, fields::CHILD_NAME)?;
    let text = get_required_field(record, fields::TEXT)?;
    let details = parse_diaper_text(child_name, text)?;

    let mut normalized = record.clone();
    normalize_timestamp_fields(&mut normalized)?;
    details.apply_to(&mut normalized, repr);

    Ok(normalized)
}

/// Extractor for `diaper` rows
#[derive(Debug, Clone, Copy)]
pub struct DiaperExtractor {
    open_air_accident: OpenAirAccidentRepr,
}

impl DiaperExtractor {
    pub fn new(open_air_accident: OpenAirAccidentRepr) -> Self {
        Self { open_air_accident }
    }
}

impl Default for DiaperExtractor {
    fn default() -> Self {
        Self::new(OpenAirAccidentRepr::Boolean)
    }
}

impl Extractor for DiaperExtractor {
    fn kind(&self) -> &str {
        DIAPER_ACTIVITY
    }

    fn extract(&self, record: &RawRecord) -> Result<NormalizedRecord, ExtractionError> {
        parse_diaper(record, self.open_air_accident)
    }
}
