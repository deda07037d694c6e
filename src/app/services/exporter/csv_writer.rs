//! CSV rendering for one activity bucket
//!
//! The format follows what Baby Connect plotting scripts expect: an unquoted
//! header row, then one row per record with every value wrapped in double
//! quotes, fields separated by the configured delimiter (`, ` by default).

use indexmap::IndexSet;
use std::path::Path;
use tracing::debug;

use crate::app::models::{FieldValue, NormalizedRecord};
use crate::config::CsvHeaderMode;
use crate::error::Result;

/// Quote a single value, doubling embedded quotes
fn quote(value: &FieldValue) -> String {
    format!("\"{}\"", value.to_string().replace('"', "\"\""))
}

/// Header for a bucket under the given mode
pub fn header_columns(records: &[NormalizedRecord], mode: CsvHeaderMode) -> Vec<String> {
    match mode {
        CsvHeaderMode::FirstRecord => records
            .first()
            .map(|r| r.keys().map(str::to_string).collect())
            .unwrap_or_default(),
        CsvHeaderMode::Union => {
            let mut columns = IndexSet::new();
            for record in records {
                columns.extend(record.keys().map(str::to_string));
            }
            columns.into_iter().collect()
        }
    }
}

/// Render a bucket as CSV text, one line per record plus the header
///
/// An empty bucket renders as an empty string.
pub fn render_csv(records: &[NormalizedRecord], delimiter: &str, mode: CsvHeaderMode) -> String {
    if records.is_empty() {
        return String::new();
    }

    let columns = header_columns(records, mode);
    let mut out = columns.join(delimiter);
    out.push('\n');

    for record in records {
        let cells: Vec<String> = match mode {
            CsvHeaderMode::FirstRecord => record.iter().map(|(_, value)| quote(value)).collect(),
            CsvHeaderMode::Union => columns
                .iter()
                .map(|column| record.get(column).map_or_else(|| quote(&FieldValue::Null), quote))
                .collect(),
        };
        out.push_str(&cells.join(delimiter));
        out.push('\n');
    }

    out
}

/// Write a bucket to `path` as CSV, returning the number of records written
pub fn write_csv(
    path: &Path,
    records: &[NormalizedRecord],
    delimiter: &str,
    mode: CsvHeaderMode,
) -> Result<usize> {
    let content = render_csv(records, delimiter, mode);
    super::writer::write_output(path, content.as_bytes())?;

    debug!("Wrote {} CSV records to {}", records.len(), path.display());
    Ok(records.len())
}
