//! JSON rendering for activity exports

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Render any serializable export payload as pretty-printed JSON
///
/// Record field order is preserved.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(payload)?;
    json.push('\n');
    Ok(json)
}

/// Write a JSON payload (a bucket or the full dataset) to `path`
pub fn write_json<T: Serialize + ?Sized>(path: &Path, payload: &T) -> Result<()> {
    let content = render_json(payload)?;
    super::writer::write_output(path, content.as_bytes())?;

    debug!("Wrote JSON export to {}", path.display());
    Ok(())
}
