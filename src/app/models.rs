//! Data models for Baby Connect activity records
//!
//! This module contains the core data structures for representing rows of a
//! Baby Connect export, the activity kind each row belongs to, and the
//! categorized dataset built from them.

use crate::constants::KNOWN_ACTIVITIES;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

// =============================================================================
// Field Values
// =============================================================================

/// Value held by a single record field
///
/// Raw rows only ever contain [`FieldValue::Text`]. Extractors add numbers,
/// booleans and nulls for the fields they derive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Borrow the value as text if it is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Get the value as a number if it is numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the value as a boolean if it is boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(value) => write!(f, "{}", value),
            FieldValue::Number(value) => write!(f, "{}", value),
            FieldValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

// =============================================================================
// Records
// =============================================================================

/// An ordered mapping from symbolized field name to value
///
/// Field order follows the column order of the source file. Inserting an
/// existing key overwrites it in place; new keys are appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

/// A row exactly as read from the export
pub type RawRecord = Record;

/// A row after optional enrichment by an extractor
pub type NormalizedRecord = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a text-only record from `(field, value)` pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), FieldValue::Text(v.into())))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Get a field's text value, if present and textual
    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(FieldValue::as_text)
    }

    /// Set a field, keeping its position if it already exists
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Remove a field, preserving the order of the remaining ones
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.shift_remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// Activity Kinds
// =============================================================================

fn whitespace_run_re() -> &'static Regex {
    static WHITESPACE_RUN_RE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_RUN_RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Normalized activity label, e.g. "Sleep Start" becomes `sleep_start`
///
/// Any string is a valid kind. Kinds order lexicographically, which is the
/// order buckets are reported and exported in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityKind(String);

impl ActivityKind {
    /// Derive the kind from a raw `activity` cell
    pub fn from_activity(activity: &str) -> Self {
        let lowered = activity.to_lowercase();
        Self(whitespace_run_re().replace_all(&lowered, "_").into_owned())
    }

    /// Derive the kind of a raw record; a missing activity maps to the empty kind
    pub fn of_record(record: &Record) -> Self {
        Self::from_activity(
            record
                .get_text(crate::constants::fields::ACTIVITY)
                .unwrap_or_default(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this kind appears in Baby Connect's documented activity list
    pub fn is_known(&self) -> bool {
        KNOWN_ACTIVITIES.contains(&self.0.as_str())
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActivityKind {
    fn from(activity: &str) -> Self {
        Self::from_activity(activity)
    }
}

// =============================================================================
// Categorized Dataset
// =============================================================================

/// Records grouped by activity kind, each bucket in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedDataset {
    buckets: BTreeMap<ActivityKind, Vec<NormalizedRecord>>,
}

impl CategorizedDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its bucket, creating the bucket on first use
    pub fn push(&mut self, kind: ActivityKind, record: NormalizedRecord) {
        self.buckets.entry(kind).or_default().push(record);
    }

    pub fn bucket(&self, kind: &str) -> Option<&[NormalizedRecord]> {
        self.buckets
            .get(&ActivityKind::from_activity(kind))
            .map(Vec::as_slice)
    }

    /// Iterate buckets in sorted kind order
    pub fn iter(&self) -> impl Iterator<Item = (&ActivityKind, &[NormalizedRecord])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn kinds(&self) -> impl Iterator<Item = &ActivityKind> {
        self.buckets.keys()
    }

    /// Number of records across all buckets
    pub fn total_records(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
