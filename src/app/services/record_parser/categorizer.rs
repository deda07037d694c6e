//! Activity dispatch and bucket construction
//!
//! The categorizer derives each row's [`ActivityKind`], runs the registered
//! extractor if there is one, and appends the result (or the untouched raw
//! row) to that kind's bucket.

use tracing::debug;

use super::extractor::ExtractorRegistry;
use super::stats::{CategorizeResult, CategorizeStats};
use crate::app::models::{ActivityKind, CategorizedDataset, NormalizedRecord, RawRecord};
use crate::config::ParserConfig;

/// Categorize rows with the default extractors
pub fn categorize(rows: &[RawRecord]) -> CategorizedDataset {
    Categorizer::default().categorize(rows)
}

/// Row categorizer backed by an extractor registry
///
/// Categorization holds no state between calls: the same rows always yield
/// the same dataset.
#[derive(Debug, Default)]
pub struct Categorizer {
    registry: ExtractorRegistry,
}

impl Categorizer {
    pub fn new(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    /// Create a categorizer with the default extractors configured from `config`
    pub fn with_config(config: &ParserConfig) -> Self {
        Self::new(ExtractorRegistry::with_config(config))
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Build the categorized dataset
    pub fn categorize(&self, rows: &[RawRecord]) -> CategorizedDataset {
        self.categorize_with_stats(rows).dataset
    }

    /// Build the categorized dataset and report how each row was handled
    pub fn categorize_with_stats(&self, rows: &[RawRecord]) -> CategorizeResult {
        let mut dataset = CategorizedDataset::new();
        let mut stats = CategorizeStats::new();

        for (index, row) in rows.iter().enumerate() {
            stats.total_rows += 1;
            let kind = ActivityKind::of_record(row);
            let record = self.normalize_row(index + 1, &kind, row, &mut stats);
            dataset.push(kind, record);
        }

        debug!("Categorization complete: {}", stats.summary());

        CategorizeResult { dataset, stats }
    }

    fn normalize_row(
        &self,
        row_number: usize,
        kind: &ActivityKind,
        row: &RawRecord,
        stats: &mut CategorizeStats,
    ) -> NormalizedRecord {
        let Some(extractor) = self.registry.get(kind) else {
            if !kind.is_known() {
                debug!("Row {} has unrecognized activity kind '{}'", row_number, kind);
                stats.add_unrecognized_kind(kind.as_str());
            }
            stats.passed_through += 1;
            return row.clone();
        };

        match extractor.extract(row) {
            Ok(record) => {
                stats.enriched += 1;
                record
            }
            Err(e) => {
                debug!("Keeping row {} ({}) raw: {}", row_number, kind, e);
                stats.add_failure(row_number, kind.as_str(), e.to_string());
                row.clone()
            }
        }
    }
}
