// file: src/utils/file.rs
// version: 1.0.0
// guid: 7dad5055-e52d-440d-9f5f-12225dc6ce3d

//! Text file helpers

use crate::error::SetupError;
use crate::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Append `content` to `path` unless the file already contains it.
///
/// The file is created when missing. Returns `true` when something was
/// written. A newline is inserted first if the existing content does not end
/// with one.
pub fn append_if_absent(path: &Path, content: &str) -> Result<bool> {
    let existing = match fs::read_to_string(path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(SetupError::config(format!(
                "could not read file {}: {}",
                path.display(),
                e
            )))
        }
    };

    if existing.contains(content) {
        debug!("{} already contains the block, skipping", path.display());
        return Ok(false);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            SetupError::config(format!("could not open file {}: {}", path.display(), e))
        })?;

    let separator = if existing.is_empty() || existing.ends_with('\n') {
        ""
    } else {
        "\n"
    };

    write!(file, "{}{}", separator, content).map_err(|e| {
        SetupError::config(format!("could not write to file {}: {}", path.display(), e))
    })?;

    Ok(true)
}
