//! Column mapping for Baby Connect export headers
//!
//! Header cells are converted into symbolic field names so that rows can be
//! addressed as `child_name`, `start_time`, `extra_data` and so on regardless
//! of the capitalization used by the export.

use csv::StringRecord;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn non_word_re() -> &'static Regex {
    static NON_WORD_RE: OnceLock<Regex> = OnceLock::new();
    NON_WORD_RE.get_or_init(|| Regex::new(r"[^\s\w]+").expect("valid non-word regex"))
}

fn whitespace_re() -> &'static Regex {
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Convert a header cell into a symbolic field name
///
/// Lowercases, drops punctuation, trims, then joins words with `_`:
/// `"Extra Data"` becomes `extra_data`, `"Start Time (local)"` becomes
/// `start_time_local`.
pub fn symbolize_header(header: &str) -> String {
    let lowered = header.to_lowercase();
    let stripped = non_word_re().replace_all(&lowered, "");
    whitespace_re()
        .replace_all(stripped.trim(), "_")
        .into_owned()
}

/// Column mapping for an export file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Symbolized column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Symbolized column names in file order
    pub columns: Vec<String>,
}

impl ColumnMapping {
    /// Symbolize the header row
    ///
    /// When two headers symbolize to the same name the first column wins the
    /// index lookup, but both stay in `columns`.
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();
        let mut columns = Vec::with_capacity(headers.len());

        for (index, header) in headers.iter().enumerate() {
            let column_name = symbolize_header(header);
            name_to_index.entry(column_name.clone()).or_insert(index);
            columns.push(column_name);
        }

        ColumnMapping {
            name_to_index,
            columns,
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Names from `required` that the header does not provide
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }
}
