//! Run-level result types for a complete parse.

use std::path::PathBuf;

use crate::app::services::activity_reader::ReadStats;
use crate::app::services::exporter::ExportStats;
use crate::app::services::record_parser::CategorizeStats;

/// Processing statistics for one input file
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub input_path: PathBuf,
    pub read: ReadStats,
    pub categorize: CategorizeStats,
    pub export: ExportStats,
    /// Records per activity kind, in sorted kind order
    pub bucket_sizes: Vec<(String, usize)>,
    pub processing_time_ms: u128,
}
