//! Integration tests for the processor module
//!
//! Runs the complete pipeline over small exports written to temp directories.


use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::ParserConfig;

/// Write a small export with enriched, passthrough and malformed rows
pub fn create_export_file(temp_dir: &TempDir) -> PathBuf {
    let content = r#"Activity,Child Name,Start Time,End Time,Duration,Text,Extra Data
Nursing,Hazel,12/04/2011 10:05 PM,12/04/2011 10:20 PM,15,"Hazel nursed (5min left, 3min)",
Diaper,Hazel,12/04/2011 10:30 PM,12/04/2011 10:30 PM,,"Hazel had a dirty diaper (leak, small)",
Nursing,Hazel,12/05/2011 02:00 AM,12/05/2011 02:10 AM,10,Hazel had a bottle,
Weight,Hazel,12/05/2011 09:00 AM,,,Hazel weighed 10 lbs,"10 lbs"
"#;
    let path = temp_dir.path().join("export.csv");
    fs::write(&path, content).unwrap();
    path
}

/// Quiet configuration writing under `<temp>/out/hazel_*`
pub fn create_test_config(temp_dir: &TempDir) -> ParserConfig {
    ParserConfig::default()
        .with_output_base(temp_dir.path().join("out").join("hazel"))
        .without_progress()
}
