//! Tests for export orchestration

use super::*;
use crate::app::services::exporter::DatasetExporter;
use crate::config::{ExportFormat, JsonExportMode, ParserConfig};
use crate::error::BabyConnectError;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn test_config(temp_dir: &TempDir) -> ParserConfig {
    ParserConfig::default()
        .with_output_base(temp_dir.path().join("out").join("parsed"))
        .without_progress()
}

#[test]
fn test_csv_export_writes_one_file_per_bucket() {
    let temp_dir = TempDir::new().unwrap();
    let exporter = DatasetExporter::new(test_config(&temp_dir));

    let stats = exporter.export(&create_test_dataset()).unwrap();

    assert_eq!(stats.file_count(), 3);
    assert_eq!(stats.csv_records_written, 3);
    let names: Vec<_> = stats
        .files_written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["parsed_diaper.csv", "parsed_nursing.csv", "parsed_weight.csv"]
    );

    let weight = fs::read_to_string(temp_dir.path().join("out/parsed_weight.csv")).unwrap();
    assert_eq!(weight, "activity, text\n\"Weight\", \"Hazel weighed 10 lbs\"\n");
}

#[test]
fn test_json_export_per_bucket() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir).with_export_format(ExportFormat::Json);
    let exporter = DatasetExporter::new(config);

    let stats = exporter.export(&create_test_dataset()).unwrap();
    assert_eq!(stats.json_buckets_written, 3);
    assert_eq!(stats.csv_records_written, 0);

    let content = fs::read_to_string(temp_dir.path().join("out/parsed_nursing.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["left_side"], serde_json::json!(6.5));
    assert_eq!(records[0]["child_name"], serde_json::json!("Hazel"));
}

#[test]
fn test_json_null_and_bool_values() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir).with_export_format(ExportFormat::Json);

    DatasetExporter::new(config)
        .export(&create_test_dataset())
        .unwrap();

    let content = fs::read_to_string(temp_dir.path().join("out/parsed_diaper.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value[0]["leak"], serde_json::json!(true));
    assert!(value[0]["color"].is_null());
}

#[test]
fn test_json_export_full_dataset_mode() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir)
        .with_export_format(ExportFormat::Json)
        .with_json_export_mode(JsonExportMode::FullDataset);

    DatasetExporter::new(config)
        .export(&create_test_dataset())
        .unwrap();

    let content = fs::read_to_string(temp_dir.path().join("out/parsed_weight.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(
        object.keys().collect::<Vec<_>>(),
        vec!["diaper", "nursing", "weight"]
    );
}

#[test]
fn test_both_formats() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir).with_export_format(ExportFormat::Both);

    let stats = DatasetExporter::new(config)
        .export(&create_test_dataset())
        .unwrap();

    assert_eq!(stats.file_count(), 6);
    assert!(temp_dir.path().join("out/parsed_diaper.csv").exists());
    assert!(temp_dir.path().join("out/parsed_diaper.json").exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let config = ParserConfig::default()
        .with_output_base(blocker.join("parsed"))
        .without_progress();
    let result = DatasetExporter::new(config).export(&create_test_dataset());

    assert!(matches!(result, Err(BabyConnectError::Export { .. })));
}

#[test]
fn test_progress_lines_reach_console_with_bar_enabled() {
    let temp_dir = TempDir::new().unwrap();
    let config = ParserConfig::default()
        .with_output_base(temp_dir.path().join("out").join("parsed"))
        .with_export_format(ExportFormat::Both);
    assert!(config.show_progress);

    let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
    DatasetExporter::new(config)
        .with_console(buffer.clone())
        .export(&create_test_dataset())
        .unwrap();

    let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Exporting parsed data to CSV",
            "\t Exporting parsed diaper data...",
            "\t Exporting parsed nursing data...",
            "\t Exporting parsed weight data...",
            "Exporting parsed data to JSON",
            "\t Exporting parsed diaper data...",
            "\t Exporting parsed nursing data...",
            "\t Exporting parsed weight data...",
        ]
    );
}

#[test]
fn test_quiet_exporter_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));

    DatasetExporter::new(test_config(&temp_dir))
        .with_console(buffer.clone())
        .quiet()
        .export(&create_test_dataset())
        .unwrap();

    assert!(buffer.lock().unwrap().is_empty());
}
