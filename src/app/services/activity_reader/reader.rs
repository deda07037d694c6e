//! Core activity export reader
//!
//! This module handles file access and row iteration, converting each CSV row
//! into a [`RawRecord`] keyed by the symbolized header.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::stats::{ReadResult, ReadStats};
use crate::app::models::RawRecord;
use crate::constants::fields;
use crate::error::{BabyConnectError, Result};

/// Columns every extractor relies on
const EXPECTED_COLUMNS: &[&str] = &[
    fields::ACTIVITY,
    fields::CHILD_NAME,
    fields::TEXT,
    fields::START_TIME,
    fields::END_TIME,
];

/// Reader for Baby Connect CSV exports
///
/// Rows shorter than the header simply lack the trailing fields; cells beyond
/// the header are dropped. Rows the CSV decoder rejects are skipped and
/// recorded in [`ReadStats`].
#[derive(Debug, Clone)]
pub struct ActivityReader {
    delimiter: u8,
}

impl Default for ActivityReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use a different field delimiter, e.g. `b'\t'` for tab-separated exports
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read an export file from disk
    ///
    /// Fails before any row is read if the path does not exist or cannot be
    /// opened.
    pub fn read_file(&self, file_path: &Path) -> Result<ReadResult> {
        info!("Reading activity export: {}", file_path.display());

        if !file_path.exists() {
            return Err(BabyConnectError::InputNotFound {
                path: file_path.to_path_buf(),
            });
        }
        if !file_path.is_file() {
            return Err(BabyConnectError::input_unreadable(
                file_path,
                "path is not a regular file",
            ));
        }

        let file = File::open(file_path)
            .map_err(|e| BabyConnectError::input_unreadable(file_path, e.to_string()))?;

        self.read_from(file)
    }

    /// Read an export from any byte source
    pub fn read_from<R: Read>(&self, source: R) -> Result<ReadResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(source);

        let headers = csv_reader.headers()?.clone();
        let mapping = ColumnMapping::analyze(&headers);

        let missing = mapping.missing_columns(EXPECTED_COLUMNS);
        if !missing.is_empty() {
            warn!(
                "Export is missing expected columns {:?}; affected rows will not be enriched",
                missing
            );
        }
        debug!("Column mapping: {:?}", mapping.columns);

        let mut stats = ReadStats::new();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            stats.total_rows += 1;

            match result {
                Ok(row) => {
                    records.push(Self::record_from_row(&row, &mapping));
                    stats.rows_read += 1;
                }
                Err(e) => {
                    stats.rows_skipped += 1;
                    stats
                        .errors
                        .push(format!("CSV parse error at row {}: {}", stats.total_rows, e));
                    warn!("Skipped row {}: {}", stats.total_rows, e);
                }
            }
        }

        info!(
            "Read {} rows ({} skipped)",
            stats.rows_read, stats.rows_skipped
        );

        Ok(ReadResult {
            records,
            columns: mapping.columns,
            stats,
        })
    }

    /// Build a raw record from a CSV row using the column mapping
    ///
    /// When two headers symbolize to the same key, the first column's value wins.
    pub fn record_from_row(row: &csv::StringRecord, mapping: &ColumnMapping) -> RawRecord {
        let mut record = RawRecord::new();
        for (column, value) in mapping.columns.iter().zip(row.iter()) {
            if !record.contains(column) {
                record.insert(column.clone(), value);
            }
        }
        record
    }
}
