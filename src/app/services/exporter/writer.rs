//! Export orchestration across formats
//!
//! The [`DatasetExporter`] walks the dataset's buckets in sorted order and
//! writes one file per bucket and format.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::csv_writer::write_csv;
use super::json_writer::write_json;
use super::progress::{Console, ProgressReporter, stdout_console};
use crate::app::models::CategorizedDataset;
use crate::config::{JsonExportMode, ParserConfig};
use crate::error::{BabyConnectError, Result};

/// Files and records written by an export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportStats {
    /// Paths of written files, in write order
    pub files_written: Vec<PathBuf>,

    /// Records written to CSV files
    pub csv_records_written: usize,

    /// Buckets written to JSON files
    pub json_buckets_written: usize,
}

impl ExportStats {
    pub fn file_count(&self) -> usize {
        self.files_written.len()
    }
}

/// Write bytes to a file, creating its parent directory if needed
pub(crate) fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BabyConnectError::export(
                path,
                format!("cannot create directory '{}': {}", parent.display(), e),
            )
        })?;
    }

    let mut file =
        fs::File::create(path).map_err(|e| BabyConnectError::export(path, e.to_string()))?;
    file.write_all(content)
        .map_err(|e| BabyConnectError::export(path, e.to_string()))?;
    Ok(())
}

/// Writes categorized datasets to per-activity files
///
/// Progress lines go to stdout unless the exporter is quiet.
#[derive(Clone)]
pub struct DatasetExporter {
    config: ParserConfig,
    console: Option<Console>,
}

impl fmt::Debug for DatasetExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetExporter")
            .field("config", &self.config)
            .field("quiet", &self.console.is_none())
            .finish()
    }
}

impl DatasetExporter {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            console: Some(stdout_console()),
        }
    }

    /// Suppress console output during export
    pub fn quiet(mut self) -> Self {
        self.console = None;
        self
    }

    /// Print progress lines to `console` instead of stdout
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = Some(console);
        self
    }

    fn reporter(&self, total_files: usize) -> ProgressReporter {
        match &self.console {
            Some(console) => ProgressReporter::with_console(
                self.config.show_progress,
                total_files,
                console.clone(),
            ),
            None => ProgressReporter::silent(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Export in every format the configuration selects
    pub fn export(&self, dataset: &CategorizedDataset) -> Result<ExportStats> {
        let mut stats = ExportStats::default();

        if self.config.export_format.writes_csv() {
            self.export_csv(dataset, &mut stats)?;
        }
        if self.config.export_format.writes_json() {
            self.export_json(dataset, &mut stats)?;
        }

        info!(
            "Export complete: {} files, {} CSV records",
            stats.file_count(),
            stats.csv_records_written
        );
        Ok(stats)
    }

    /// Write one CSV file per bucket
    pub fn export_csv(&self, dataset: &CategorizedDataset, stats: &mut ExportStats) -> Result<()> {
        let reporter = self.reporter(dataset.len());
        reporter.println("Exporting parsed data to CSV");

        for (kind, records) in dataset.iter() {
            reporter.println(format!("\t Exporting parsed {} data...", kind));
            reporter.set_message(kind.as_str());

            let path = self.config.output_path(kind.as_str(), "csv");
            stats.csv_records_written += write_csv(
                &path,
                records,
                &self.config.csv_delimiter,
                self.config.csv_header_mode,
            )?;
            stats.files_written.push(path);
            reporter.increment();
        }

        reporter.finish();
        Ok(())
    }

    /// Write one JSON file per bucket
    ///
    /// In [`JsonExportMode::FullDataset`] every file holds the whole dataset.
    pub fn export_json(&self, dataset: &CategorizedDataset, stats: &mut ExportStats) -> Result<()> {
        let reporter = self.reporter(dataset.len());
        reporter.println("Exporting parsed data to JSON");

        for (kind, records) in dataset.iter() {
            reporter.println(format!("\t Exporting parsed {} data...", kind));
            reporter.set_message(kind.as_str());

            let path = self.config.output_path(kind.as_str(), "json");
            match self.config.json_export_mode {
                JsonExportMode::PerBucket => write_json(&path, records)?,
                JsonExportMode::FullDataset => write_json(&path, dataset)?,
            }
            stats.json_buckets_written += 1;
            stats.files_written.push(path);
            reporter.increment();
        }

        reporter.finish();
        Ok(())
    }
}
