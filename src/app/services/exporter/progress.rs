//! Progress reporting for export operations
//!
//! Console lines always go to the console writer (stdout by default). When a
//! progress bar is active the bar is suspended while a line is written so the
//! two do not tear.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Shared destination for console lines
pub type Console = Arc<Mutex<dyn Write + Send>>;

/// Console writing to stdout
pub fn stdout_console() -> Console {
    Arc::new(Mutex::new(std::io::stdout()))
}

/// Progress reporter for per-bucket export
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    console: Option<Console>,
}

impl ProgressReporter {
    /// Create a reporter printing to stdout, with a bar when `enabled`
    pub fn new(enabled: bool, total_files: usize) -> Self {
        Self::with_console(enabled, total_files, stdout_console())
    }

    /// Create a reporter printing to the given console
    pub fn with_console(enabled: bool, total_files: usize, console: Console) -> Self {
        Self {
            progress_bar: enabled.then(|| Self::progress_bar(total_files)),
            console: Some(console),
        }
    }

    /// Reporter that prints nothing
    pub fn silent() -> Self {
        Self {
            progress_bar: None,
            console: None,
        }
    }

    fn progress_bar(total_files: usize) -> ProgressBar {
        let pb = ProgressBar::new(total_files as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files | {msg}")
        {
            pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
        }

        debug!("Progress bar initialized for {} files", total_files);
        pb
    }

    /// Print a console line above the bar
    pub fn println(&self, line: impl AsRef<str>) {
        let Some(console) = &self.console else {
            return;
        };

        let write_line = || match console.lock() {
            Ok(mut out) => {
                if let Err(e) = writeln!(out, "{}", line.as_ref()) {
                    warn!("Failed to write console line: {}", e);
                }
            }
            Err(_) => warn!("Console writer is poisoned"),
        };

        match &self.progress_bar {
            Some(pb) => pb.suspend(write_line),
            None => write_line(),
        }
    }

    /// Set the message shown next to the bar
    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    /// Mark one file as written
    pub fn increment(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(1);
        }
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
