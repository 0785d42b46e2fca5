//! Draft files: one pretty-printed JSON `InvoiceDraft` per file.
//!
//! Loading always calls [`InvoiceDraft::refresh`], so a hand-edited file
//! with stale amounts or gapped serials comes back consistent, and one with
//! negative percentages, rates or quantities is refused.

use std::fs;
use std::path::Path;

use apex_core::InvoiceDraft;
use serde::Serialize;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Reads a draft, checks its stored numbers and re-derives its amounts
/// and serial numbers.
pub fn load_draft(path: &Path) -> CliResult<InvoiceDraft> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let mut draft: InvoiceDraft =
        serde_json::from_str(&raw).map_err(|e| CliError::invalid_json(path, e))?;
    draft.refresh()?;

    debug!(path = %path.display(), items = draft.line_items().len(), "draft loaded");
    Ok(draft)
}

/// Writes a draft, replacing the file.
pub fn save_draft(path: &Path, draft: &InvoiceDraft) -> CliResult<()> {
    write_json(path, draft)?;
    debug!(path = %path.display(), "draft saved");
    Ok(())
}

/// Writes any value as pretty JSON with a trailing newline.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> CliResult<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| CliError::io(path, e))
}
