//! Error handling for Baby Connect parsing operations.
//!
//! Provides the crate-level error type for input, configuration and export
//! failures. Per-record extraction failures have their own type in
//! [`crate::app::services::record_parser::ExtractionError`] and never
//! surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BabyConnectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Unable to read input file '{path}': {reason}")]
    InputUnreadable { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Export failed for '{path}': {reason}")]
    Export { path: PathBuf, reason: String },
}

impl BabyConnectError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an export error for the file being written
    pub fn export(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an unreadable input error
    pub fn input_unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InputUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BabyConnectError>;
