//! Record categorization and per-activity text parsing
//!
//! This module turns raw export rows into a [`CategorizedDataset`]: each row is
//! assigned to the bucket of its activity kind, and rows whose kind has a
//! registered [`Extractor`] are enriched with fields parsed out of their
//! free-text description.
//!
//! # Architecture
//!
//! - [`categorizer`] - Activity dispatch and bucket construction
//! - [`extractor`] - The `Extractor` trait, its error type and the registry
//! - [`nursing`] - Per-side nursing minutes
//! - [`diaper`] - Diaper type and attribute classification
//! - [`timestamps`] - Permissive date-time parsing shared by the extractors
//! - [`field_parsers`] - Required field access for extractors
//! - [`stats`] - Categorization statistics
//!
//! # Fallback Policy
//!
//! Extraction is all-or-nothing per row. When no extractor is registered for
//! a kind, or the registered one fails, the raw row is stored unchanged in its
//! bucket. Failures are counted in [`CategorizeStats`] and logged at debug
//! level; they never abort categorization.
//!
//! # Example Usage
//!
//! ```rust
//! use baby_connect_parser::app::models::RawRecord;
//! use baby_connect_parser::app::services::record_parser::Categorizer;
//!
//! let rows = vec![RawRecord::from_pairs([
//!     ("activity", "Nursing"),
//!     ("child_name", "Bob"),
//!     ("start_time", "01/02/2012 08:00 AM"),
//!     ("end_time", "01/02/2012 08:10 AM"),
//!     ("text", "Bob nursed (10min)"),
//! ])];
//!
//! let dataset = Categorizer::default().categorize(&rows);
//! let nursing = dataset.bucket("nursing").unwrap();
//! assert_eq!(nursing[0].get("left_side").and_then(|v| v.as_number()), Some(5.0));
//! ```

pub mod categorizer;
pub mod diaper;
pub mod extractor;
pub mod field_parsers;
pub mod nursing;
pub mod stats;
pub mod timestamps;

#[cfg(test)]
pub mod tests;

pub use categorizer::{Categorizer, categorize};
pub use diaper::{DiaperDetails, DiaperExtractor, parse_diaper, parse_diaper_text};
pub use extractor::{ExtractionError, Extractor, ExtractorRegistry};
pub use nursing::{NursingExtractor, SideTotals, parse_nursing, parse_nursing_text};
pub use stats::{CategorizeResult, CategorizeStats};
pub use timestamps::{normalize_timestamp, parse_timestamp};

pub use crate::app::models::CategorizedDataset;
