//! Command execution for the parser binary
//!
//! Resolves configuration from the TOML file and flags, installs logging and
//! runs the [`BabyConnectProcessor`] over the input export.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::args::Args;
use crate::config::ParserConfig;
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::error::Result;
use crate::models::ProcessingStats;
use crate::processor::BabyConnectProcessor;

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("baby_connect_parser={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Config file to load: the explicit `--config`, else the default file in `search_dir`
fn config_file_path(args: &Args, search_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(path.clone());
    }

    let default_path = search_dir.join(DEFAULT_CONFIG_FILE);
    default_path.is_file().then_some(default_path)
}

/// Build the run configuration, looking for the default config file in `search_dir`
///
/// Flags override values from the file.
pub fn load_config_from(args: &Args, search_dir: &Path) -> Result<ParserConfig> {
    let mut config = match config_file_path(args, search_dir) {
        Some(path) => {
            info!("Using configuration file {}", path.display());
            ParserConfig::from_toml_file(&path)?
        }
        None => ParserConfig::default(),
    };

    if let Some(output_base) = &args.output_base {
        config = config.with_output_base(output_base.clone());
    }
    if let Some(format) = args.format {
        config = config.with_export_format(format);
    }
    if !args.show_progress() {
        config = config.without_progress();
    }

    config.validate()?;
    Ok(config)
}

/// Build the run configuration from the working directory
pub fn load_config(args: &Args) -> Result<ParserConfig> {
    load_config_from(args, Path::new("."))
}

/// Run the parser for the given arguments
pub fn run(args: &Args) -> Result<ProcessingStats> {
    let config = load_config(args)?;
    debug!("Configuration: {:?}", config);

    let mut processor = BabyConnectProcessor::new(args.input_path.clone())?.with_config(config);
    if args.quiet {
        processor = processor.quiet();
    }

    let stats = processor.process()?;
    info!(
        "Wrote {} files in {}ms",
        stats.export.file_count(),
        stats.processing_time_ms
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExportFormat, JsonExportMode};
    use crate::error::BabyConnectError;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["baby_connect_parser"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from(&parse(&["export.csv"]), temp_dir.path()).unwrap();

        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_default_config_file_is_picked_up() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "json_export_mode = \"full_dataset\"\nexport_format = \"json\"\n",
        )
        .unwrap();

        let config = load_config_from(&parse(&["export.csv"]), temp_dir.path()).unwrap();

        assert_eq!(config.json_export_mode, JsonExportMode::FullDataset);
        assert_eq!(config.export_format, ExportFormat::Json);
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        fs::write(&config_path, "export_format = \"json\"\noutput_base = \"from_file\"\n").unwrap();

        let args = parse(&[
            "export.csv",
            "--config",
            config_path.to_str().unwrap(),
            "--format",
            "both",
            "-o",
            "from_flag",
            "-q",
        ]);
        let config = load_config_from(&args, temp_dir.path()).unwrap();

        assert_eq!(config.export_format, ExportFormat::Both);
        assert_eq!(config.output_base, PathBuf::from("from_flag"));
        assert!(!config.show_progress);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let args = parse(&["export.csv", "-c", missing.to_str().unwrap()]);

        let result = load_config_from(&args, temp_dir.path());
        assert!(matches!(result, Err(BabyConnectError::Configuration { .. })));
    }
}
