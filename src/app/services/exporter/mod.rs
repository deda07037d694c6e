//! Per-activity export of categorized datasets
//!
//! Each bucket of a [`CategorizedDataset`](crate::app::models::CategorizedDataset)
//! is written to its own file named `<base>_<activity>.csv` or
//! `<base>_<activity>.json`, buckets in sorted kind order.
//!
//! # Module Organization
//!
//! - [`writer`] - Export orchestration across formats
//! - [`csv_writer`] - Quoted, comma-space delimited CSV rendering
//! - [`json_writer`] - JSON rendering of a bucket or the whole dataset
//! - [`progress`] - Progress bar and console lines
//!
//! # Failure Semantics
//!
//! The first file that cannot be written aborts the export. Files written
//! before the failure are left in place.

pub mod csv_writer;
pub mod json_writer;
pub mod progress;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv_writer::{render_csv, write_csv};
pub use json_writer::{render_json, write_json};
pub use progress::{Console, ProgressReporter, stdout_console};
pub use writer::{DatasetExporter, ExportStats};
