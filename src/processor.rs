//! Main processing pipeline.
//!
//! Orchestrates a complete parse: read the export, categorize and enrich its
//! rows, print the per-activity summary, and write the export files.

use colored::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::app::models::CategorizedDataset;
use crate::app::services::activity_reader::ActivityReader;
use crate::app::services::exporter::DatasetExporter;
use crate::app::services::record_parser::Categorizer;
use crate::config::ParserConfig;
use crate::error::{BabyConnectError, Result};
use crate::models::ProcessingStats;

/// Processor for one Baby Connect export file
pub struct BabyConnectProcessor {
    input_path: PathBuf,
    config: ParserConfig,
    quiet: bool,
}

impl BabyConnectProcessor {
    /// Create a processor for an input file
    ///
    /// Fails immediately if the file does not exist.
    pub fn new(input_path: PathBuf) -> Result<Self> {
        if !input_path.exists() {
            return Err(BabyConnectError::InputNotFound { path: input_path });
        }

        Ok(Self {
            input_path,
            config: ParserConfig::default(),
            quiet: false,
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Suppress the console summary
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Read and categorize without exporting
    pub fn categorize(&self) -> Result<(CategorizedDataset, ProcessingStats)> {
        let start_time = Instant::now();
        self.config.validate()?;

        let read_result = ActivityReader::new().read_file(&self.input_path)?;
        let categorizer = Categorizer::with_config(&self.config);
        let result = categorizer.categorize_with_stats(&read_result.records);

        info!("{}", result.stats.summary());
        for failure in &result.stats.failures {
            debug!("{}", failure);
        }

        let stats = ProcessingStats {
            input_path: self.input_path.clone(),
            read: read_result.stats,
            bucket_sizes: result
                .dataset
                .iter()
                .map(|(kind, records)| (kind.to_string(), records.len()))
                .collect(),
            categorize: result.stats,
            export: Default::default(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        Ok((result.dataset, stats))
    }

    /// Main processing entry point
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();

        if !self.quiet {
            println!("Analyzing {}...", self.input_path.display());
        }

        let (dataset, mut stats) = self.categorize()?;

        if !self.quiet {
            print_summary(&self.input_path.display().to_string(), &stats);
        }

        let mut exporter = DatasetExporter::new(self.config.clone());
        if self.quiet {
            exporter = exporter.quiet();
        }
        stats.export = exporter.export(&dataset)?;
        stats.processing_time_ms = start_time.elapsed().as_millis();

        Ok(stats)
    }
}

/// `entry` or `entries`
fn entries_label(count: usize) -> &'static str {
    if count == 1 { "entry" } else { "entries" }
}

/// Print the per-activity record counts
pub fn print_summary(input: &str, stats: &ProcessingStats) {
    println!(
        "{}",
        format!("Summary of data from '{}':", input).bright_green().bold()
    );

    for (kind, count) in &stats.bucket_sizes {
        println!(
            "Found {} {} for {}",
            count.to_string().bright_white().bold(),
            entries_label(*count),
            kind.bright_cyan()
        );
    }

    if stats.categorize.demoted > 0 {
        println!(
            "{}",
            format!(
                "{} rows could not be parsed and were kept as-is",
                stats.categorize.demoted
            )
            .bright_yellow()
        );
    }
    if stats.read.rows_skipped > 0 {
        println!(
            "{}",
            format!("{} unreadable rows skipped", stats.read.rows_skipped).bright_yellow()
        );
    }
}

#[cfg(test)]
mod tests;
