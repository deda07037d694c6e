//! Categorization statistics and result structures

use crate::app::models::CategorizedDataset;

/// Categorized dataset with statistics about how rows were handled
#[derive(Debug, Clone)]
pub struct CategorizeResult {
    pub dataset: CategorizedDataset,
    pub stats: CategorizeStats,
}

/// Counts of enriched and passed-through rows
///
/// `enriched + passed_through + demoted == total_rows` always holds.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategorizeStats {
    /// Rows categorized
    pub total_rows: usize,

    /// Rows replaced by their extractor's output
    pub enriched: usize,

    /// Rows whose kind has no extractor
    pub passed_through: usize,

    /// Rows kept raw because their extractor failed
    pub demoted: usize,

    /// Extraction failures, one per demoted row
    pub failures: Vec<String>,

    /// Activity kinds outside the known Baby Connect set, in first-seen order
    pub unrecognized_kinds: Vec<String>,
}

impl CategorizeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an extraction failure for a 1-based row number
    pub fn add_failure(&mut self, row_number: usize, kind: &str, message: impl AsRef<str>) {
        self.demoted += 1;
        self.failures.push(format!(
            "Row {} ({}): {}",
            row_number,
            kind,
            message.as_ref()
        ));
    }

    /// Note a kind outside the known set; each kind is kept once
    pub fn add_unrecognized_kind(&mut self, kind: &str) {
        if !self.unrecognized_kinds.iter().any(|k| k == kind) {
            self.unrecognized_kinds.push(kind.to_string());
        }
    }

    /// Share of rows with an extractor that were enriched, as a percentage
    pub fn enrichment_rate(&self) -> f64 {
        let attempted = self.enriched + self.demoted;
        if attempted == 0 {
            0.0
        } else {
            (self.enriched as f64 / attempted as f64) * 100.0
        }
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} rows: {} enriched, {} passed through, {} kept raw after extraction failure",
            self.total_rows, self.enriched, self.passed_through, self.demoted
        )
    }
}
