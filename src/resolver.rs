//! File extension resolution.

use crate::error::RunnerError;
use std::fmt;
use std::path::Path;

/// A normalized extension key, or the absence of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extension {
    Key(String),
    None,
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::None => Ok(()),
        }
    }
}

/// Lower-case a registry key and strip a leading dot.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_lowercase()
}

/// Resolve the extension of an existing file.
///
/// # Errors
/// Returns `FileNotFound` if `path` does not exist.
pub fn resolve_extension(path: &Path) -> Result<Extension, RunnerError> {
    if !path.exists() {
        return Err(RunnerError::FileNotFound(path.to_path_buf()));
    }

    Ok(match path.extension() {
        Some(ext) if !ext.is_empty() => Extension::Key(normalize_key(&ext.to_string_lossy())),
        _ => Extension::None,
    })
}
