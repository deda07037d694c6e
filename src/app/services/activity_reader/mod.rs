//! Reader for Baby Connect activity exports
//!
//! Baby Connect exports one delimited row per logged activity. This module
//! turns that file into [`RawRecord`](crate::app::models::RawRecord) values
//! keyed by symbolized column names.
//!
//! ## Architecture
//!
//! - [`reader`] - File handling and row iteration
//! - [`column_mapping`] - Header symbolization and column lookup
//! - [`stats`] - Read statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use baby_connect_parser::app::services::activity_reader::ActivityReader;
//!
//! # fn example() -> baby_connect_parser::Result<()> {
//! let result = ActivityReader::new().read_file(std::path::Path::new("export.csv"))?;
//!
//! println!("Read {} of {} rows", result.stats.rows_read, result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod reader;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use column_mapping::{ColumnMapping, symbolize_header};
pub use reader::ActivityReader;
pub use stats::{ReadResult, ReadStats};
