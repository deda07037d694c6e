//! Configuration management and validation.
//!
//! Provides the configuration structure for export paths and formats and
//! the compatibility switches that reproduce the legacy export layout.

use crate::constants::{DEFAULT_CSV_DELIMITER, DEFAULT_OUTPUT_BASE};
use crate::error::{BabyConnectError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// One CSV file per activity
    Csv,
    /// One JSON file per activity
    Json,
    /// Both CSV and JSON
    Both,
}

impl ExportFormat {
    pub fn writes_csv(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Both)
    }

    pub fn writes_json(&self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Both)
    }
}

/// How the CSV header row is built for a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvHeaderMode {
    /// Union of all record keys in first-seen order; missing cells are empty
    Union,
    /// Keys of the first record only; later rows emit their own values as-is
    FirstRecord,
}

/// What each JSON export file contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonExportMode {
    /// Only the records of the file's own activity
    PerBucket,
    /// The whole categorized dataset, repeated in every file
    FullDataset,
}

/// Representation of the diaper `open_air_accident` field when present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenAirAccidentRepr {
    /// `true` / `false`
    Boolean,
    /// The matched phrase ("open air accident") or `false`
    Phrase,
}

/// Global configuration for a parse run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Output path prefix; files are written as `<base>_<activity>.<ext>`
    pub output_base: PathBuf,

    /// Which export files to produce
    pub export_format: ExportFormat,

    /// Delimiter between exported CSV fields
    pub csv_delimiter: String,

    /// CSV header construction
    pub csv_header_mode: CsvHeaderMode,

    /// JSON file contents
    pub json_export_mode: JsonExportMode,

    /// Diaper open-air-accident representation
    pub open_air_accident: OpenAirAccidentRepr,

    /// Show a progress bar while exporting
    pub show_progress: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            output_base: PathBuf::from(DEFAULT_OUTPUT_BASE),
            export_format: ExportFormat::Csv,
            csv_delimiter: DEFAULT_CSV_DELIMITER.to_string(),
            csv_header_mode: CsvHeaderMode::Union,
            json_export_mode: JsonExportMode::PerBucket,
            open_air_accident: OpenAirAccidentRepr::Boolean,
            show_progress: true,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a TOML file; unspecified keys keep their defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BabyConnectError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            BabyConnectError::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Configuration matching the legacy export layout
    pub fn strict_compatibility() -> Self {
        Self {
            csv_header_mode: CsvHeaderMode::FirstRecord,
            json_export_mode: JsonExportMode::FullDataset,
            open_air_accident: OpenAirAccidentRepr::Phrase,
            ..Self::default()
        }
    }

    /// Set the output path prefix
    pub fn with_output_base(mut self, output_base: impl Into<PathBuf>) -> Self {
        self.output_base = output_base.into();
        self
    }

    /// Set the export format
    pub fn with_export_format(mut self, export_format: ExportFormat) -> Self {
        self.export_format = export_format;
        self
    }

    pub fn with_csv_header_mode(mut self, mode: CsvHeaderMode) -> Self {
        self.csv_header_mode = mode;
        self
    }

    pub fn with_json_export_mode(mut self, mode: JsonExportMode) -> Self {
        self.json_export_mode = mode;
        self
    }

    pub fn with_open_air_accident(mut self, repr: OpenAirAccidentRepr) -> Self {
        self.open_air_accident = repr;
        self
    }

    /// Disable the export progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Check the configuration for values that cannot produce an export
    pub fn validate(&self) -> Result<()> {
        if self.output_base.as_os_str().is_empty() {
            return Err(BabyConnectError::configuration(
                "output_base must not be empty",
            ));
        }
        if self.csv_delimiter.is_empty() {
            return Err(BabyConnectError::configuration(
                "csv_delimiter must not be empty",
            ));
        }
        Ok(())
    }

    /// Path of the export file for one activity
    pub fn output_path(&self, activity: &str, extension: &str) -> PathBuf {
        let mut file_name = self.output_base.as_os_str().to_os_string();
        file_name.push(format!("_{}.{}", activity, extension));
        PathBuf::from(file_name)
    }
}
