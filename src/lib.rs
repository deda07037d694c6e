//! Baby Connect Parser Library
//!
//! Converts the CSV activity export of the Baby Connect infant tracking
//! service into per-activity datasets.
//!
//! This library provides tools for:
//! - Reading exports with symbolized (snake_case) column names
//! - Grouping rows into buckets by activity kind
//! - Extracting structured fields from nursing and diaper entries
//! - Normalizing timestamps to `YYYY-MM-DD HH:MM:SS`
//! - Writing one CSV and/or JSON file per activity
//!
//! A row whose free text cannot be parsed is kept unchanged in its bucket;
//! categorization never fails because of a single malformed entry.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod activity_reader;
        pub mod exporter;
        pub mod record_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ActivityKind, CategorizedDataset, FieldValue, Record};
pub use app::services::record_parser::{ExtractionError, Extractor, ExtractorRegistry, categorize};
pub use config::ParserConfig;
pub use error::{BabyConnectError, Result};
pub use processor::BabyConnectProcessor;
