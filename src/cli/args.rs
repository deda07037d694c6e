//! Command line argument definitions

use clap::Parser;
use std::path::PathBuf;

use crate::config::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "baby_connect_parser")]
#[command(about = "Split a Baby Connect activity export into per-activity CSV and JSON files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the Baby Connect CSV export
    #[arg(value_name = "INPUT_FILE")]
    pub input_path: PathBuf,

    /// Output path prefix; files are written as <PREFIX>_<activity>.<ext>
    #[arg(short, long, value_name = "PREFIX")]
    pub output_base: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
