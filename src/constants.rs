//! Application constants for the Baby Connect parser
//!
//! This module contains field names, default values, date formats and the
//! diaper attribute classification table used throughout the parser.

// =============================================================================
// Field Names
// =============================================================================

/// Symbolized column names produced by the activity reader
pub mod fields {
    pub const ACTIVITY: &str = "activity";
    pub const CHILD_NAME: &str = "child_name";
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";
    pub const TEXT: &str = "text";
    pub const DURATION: &str = "duration";
    pub const EXTRA_DATA: &str = "extra_data";

    // Nursing output
    pub const LEFT_SIDE: &str = "left_side";
    pub const RIGHT_SIDE: &str = "right_side";

    // Diaper output, in the order they are appended to a record
    pub const COLOR: &str = "color";
    pub const CONSISTENCY: &str = "consistency";
    pub const LEAK: &str = "leak";
    pub const OPEN_AIR_ACCIDENT: &str = "open_air_accident";
    pub const QUANTITY: &str = "quantity";
    pub const TYPE: &str = "type";

    /// Timestamp fields rewritten by every extractor
    pub const TIMESTAMP_FIELDS: &[&str] = &[START_TIME, END_TIME];
}

// =============================================================================
// Activity Kinds
// =============================================================================

/// Activity kinds found in Baby Connect exports
///
/// Only `nursing` and `diaper` have extractors; the rest are passed through.
pub const KNOWN_ACTIVITIES: &[&str] = &[
    "bottle",
    "diaper",
    "diary",
    "head_size",
    "height",
    "message",
    "milestone",
    "nursing",
    "sleep",
    "sleep_start",
    "temperature",
    "weight",
];

pub const NURSING_ACTIVITY: &str = "nursing";
pub const DIAPER_ACTIVITY: &str = "diaper";

// =============================================================================
// Timestamp Formats
// =============================================================================

/// Canonical output format for normalized timestamps
pub const CANONICAL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats carrying an explicit UTC offset; wall-clock time is preserved
pub const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%dT%H:%M:%S%z"];

/// Naive date-time formats, tried in order
///
/// Two-digit years come first: `%Y` would otherwise accept "12" as year 12.
pub const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%y %I:%M %p",
    "%m/%d/%y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%y %H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only formats, normalized to midnight; two-digit years first
pub const DATE_ONLY_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

// =============================================================================
// Diaper Attributes
// =============================================================================

/// Category of a diaper attribute phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiaperAttribute {
    Consistency,
    Quantity,
    Color,
    Leak,
    OpenAirAccident,
}

/// Known attribute phrases and their category
pub const DIAPER_ATTRIBUTES: &[(&str, DiaperAttribute)] = &[
    ("normal", DiaperAttribute::Consistency),
    ("diarrhea", DiaperAttribute::Consistency),
    ("meconium", DiaperAttribute::Consistency),
    ("hard", DiaperAttribute::Consistency),
    ("little balls", DiaperAttribute::Consistency),
    ("mucousy", DiaperAttribute::Consistency),
    ("runny", DiaperAttribute::Consistency),
    ("seedy", DiaperAttribute::Consistency),
    ("soft", DiaperAttribute::Consistency),
    ("watery", DiaperAttribute::Consistency),
    ("claylike", DiaperAttribute::Consistency),
    ("small", DiaperAttribute::Quantity),
    ("medium", DiaperAttribute::Quantity),
    ("large", DiaperAttribute::Quantity),
    ("dark brown", DiaperAttribute::Color),
    ("light brown", DiaperAttribute::Color),
    ("mustard", DiaperAttribute::Color),
    ("green", DiaperAttribute::Color),
    ("red", DiaperAttribute::Color),
    ("orange", DiaperAttribute::Color),
    ("yellow", DiaperAttribute::Color),
    ("white", DiaperAttribute::Color),
    ("black", DiaperAttribute::Color),
    ("leak", DiaperAttribute::Leak),
    ("open air accident", DiaperAttribute::OpenAirAccident),
];

/// Look up the category of a trimmed attribute phrase
pub fn classify_diaper_attribute(phrase: &str) -> Option<DiaperAttribute> {
    DIAPER_ATTRIBUTES
        .iter()
        .find(|(known, _)| *known == phrase)
        .map(|(_, category)| *category)
}

// =============================================================================
// Export Defaults
// =============================================================================

/// Default output path prefix; files are named `<base>_<activity>.<ext>`
pub const DEFAULT_OUTPUT_BASE: &str = "./baby_connect_parsed";

/// Delimiter between CSV fields in exported files
pub const DEFAULT_CSV_DELIMITER: &str = ", ";

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "baby_connect_parser.toml";
