//! Read statistics and result structures for activity exports

use crate::app::models::RawRecord;

/// Rows read from an export with basic statistics
#[derive(Debug, Clone)]
pub struct ReadResult {
    /// Rows in file order
    pub records: Vec<RawRecord>,

    /// Symbolized header in file order
    pub columns: Vec<String>,

    pub stats: ReadStats,
}

/// Simple read statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ReadStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Rows converted into records
    pub rows_read: usize,

    /// Rows skipped because the CSV decoder rejected them
    pub rows_skipped: usize,

    /// Decoder errors for debugging
    pub errors: Vec<String>,
}

impl ReadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of rows read, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_read as f64 / self.total_rows as f64) * 100.0
        }
    }
}
