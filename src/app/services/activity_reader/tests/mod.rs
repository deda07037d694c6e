//! Test utilities for activity reader testing

use std::io::Write;
use tempfile::NamedTempFile;

mod reader_tests;

/// A small Baby Connect export covering the supported activity grammars
pub fn create_test_export() -> String {
    r#"Activity,Child Name,Start Time,End Time,Duration,Text,Extra Data
Nursing,Hazel,12/04/2011 10:05 PM,12/04/2011 10:20 PM,15,"Hazel nursed (5min left, 3min)",
Diaper,Hazel,12/04/2011 10:30 PM,12/04/2011 10:30 PM,,"Hazel had a wet diaper (medium, yellow, normal)",
Sleep Start,Hazel,12/04/2011 11:00 PM,,,Hazel went to sleep,
Weight,Hazel,12/05/2011 09:00 AM,,,Hazel weighed 10 lbs,"10 lbs""#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
