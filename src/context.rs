//! Placeholder values for a single invocation.

use crate::error::RunnerError;
use crate::template::Placeholder;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderContext {
    /// Absolute path of the source file.
    pub file: PathBuf,
    /// File name without directory or extension.
    pub name: String,
    /// Working directory for substitution and for the child process.
    pub cwd: PathBuf,
    /// Where a compiled artifact named `name` ends up inside `cwd`.
    pub run_path: PathBuf,
}

impl PlaceholderContext {
    /// Build the context for `file`, using `cwd_override` instead of the
    /// file's parent directory when given.
    ///
    /// # Errors
    /// Returns `FileNotFound` if `file` does not exist.
    pub fn new(file: &Path, cwd_override: Option<&Path>) -> Result<Self, RunnerError> {
        if !file.exists() {
            return Err(RunnerError::FileNotFound(file.to_path_buf()));
        }
        let file = std::path::absolute(file)
            .map_err(|_| RunnerError::FileNotFound(file.to_path_buf()))?;

        let name = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let cwd = match cwd_override {
            Some(dir) => std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf()),
            None => file
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        };

        let run_path = make_run_path(&name, &cwd);

        Ok(Self {
            file,
            name,
            cwd,
            run_path,
        })
    }

    #[must_use]
    pub fn value(&self, placeholder: Placeholder) -> Cow<'_, str> {
        match placeholder {
            Placeholder::File => self.file.to_string_lossy(),
            Placeholder::Name => Cow::Borrowed(&self.name),
            Placeholder::Cwd => self.cwd.to_string_lossy(),
            Placeholder::RunPath => self.run_path.to_string_lossy(),
        }
    }
}

/// Path of the compiled artifact for `name` in `cwd`.
#[must_use]
pub fn make_run_path(name: &str, cwd: &Path) -> PathBuf {
    if cfg!(windows) {
        cwd.join(format!("{name}.exe"))
    } else {
        cwd.join(name)
    }
}
