//! Extractor interface and registry
//!
//! An extractor turns one activity's raw row into an enriched record. The
//! registry maps activity kinds to extractors; kinds without an entry are
//! passed through unchanged by the categorizer.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use super::diaper::DiaperExtractor;
use super::nursing::NursingExtractor;
use crate::app::models::{ActivityKind, NormalizedRecord, RawRecord};
use crate::config::ParserConfig;

/// Reasons an extractor rejects a row
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("text does not match the {activity} grammar: '{text}'")]
    GrammarMismatch { activity: String, text: String },

    #[error("unparseable timestamp in '{field}': '{value}'")]
    InvalidTimestamp { field: String, value: String },

    #[error("invalid {activity} entry '{entry}': {reason}")]
    InvalidEntry {
        activity: String,
        entry: String,
        reason: String,
    },

    #[error("could not build pattern for subject '{subject}': {reason}")]
    InvalidPattern { subject: String, reason: String },
}

impl ExtractionError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn grammar_mismatch(activity: impl Into<String>, text: impl Into<String>) -> Self {
        Self::GrammarMismatch {
            activity: activity.into(),
            text: text.into(),
        }
    }

    pub fn invalid_entry(
        activity: impl Into<String>,
        entry: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidEntry {
            activity: activity.into(),
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}

/// Activity-specific parser for the free-text description of a row
pub trait Extractor: Send + Sync {
    /// Activity this extractor handles, e.g. `nursing`
    fn kind(&self) -> &str;

    /// Produce the enriched record, or explain why the row cannot be enriched
    ///
    /// The input is never modified; an error means the caller keeps the raw row.
    fn extract(&self, record: &RawRecord) -> Result<NormalizedRecord, ExtractionError>;
}

/// Mapping from activity kind to its extractor
pub struct ExtractorRegistry {
    extractors: HashMap<ActivityKind, Box<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with no extractors; every row is passed through
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Create a registry with the nursing and diaper extractors
    pub fn with_config(config: &ParserConfig) -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(NursingExtractor));
        registry.register(Box::new(DiaperExtractor::new(config.open_air_accident)));
        registry
    }

    /// Register an extractor under its kind, returning the one it replaces
    pub fn register(&mut self, extractor: Box<dyn Extractor>) -> Option<Box<dyn Extractor>> {
        let kind = ActivityKind::from_activity(extractor.kind());
        self.extractors.insert(kind, extractor)
    }

    /// Look up the extractor for a kind
    pub fn get(&self, kind: &ActivityKind) -> Option<&dyn Extractor> {
        self.extractors.get(kind).map(Box::as_ref)
    }

    pub fn is_registered(&self, kind: &ActivityKind) -> bool {
        self.extractors.contains_key(kind)
    }

    /// Registered kinds in sorted order
    pub fn kinds(&self) -> Vec<&ActivityKind> {
        let mut kinds: Vec<_> = self.extractors.keys().collect();
        kinds.sort();
        kinds
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_config(&ParserConfig::default())
    }
}

impl fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
