//! Error kinds and the exit codes they map to.

use std::path::PathBuf;
use thiserror::Error;

/// Stable process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const USER_CANCELLED: i32 = 6;
    pub const FILE_NOT_FOUND: i32 = 2;
    pub const UNSUPPORTED_EXTENSION: i32 = 3;
    pub const SPAWN_FAILED: i32 = 4;
    pub const INVALID_CONFIG: i32 = 5;
    pub const PROMPT_FAILED: i32 = 7;
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unknown file type: .{0}")]
    UnsupportedExtension(String),

    #[error("Compile step exited with code {0}")]
    CompileFailed(i32),

    #[error("Command exited with code {0}")]
    RunFailed(i32),

    #[error("Aborted.")]
    UserCancelled,

    #[error("Could not read confirmation: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("Execution failed: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{}': {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Invalid template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },
}

impl RunnerError {
    /// Exit code the process should terminate with for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound(_) => exit_code::FILE_NOT_FOUND,
            Self::UnsupportedExtension(_) => exit_code::UNSUPPORTED_EXTENSION,
            Self::CompileFailed(code) | Self::RunFailed(code) => *code,
            Self::UserCancelled => exit_code::USER_CANCELLED,
            Self::Prompt(_) => exit_code::PROMPT_FAILED,
            Self::Spawn { .. } => exit_code::SPAWN_FAILED,
            Self::InvalidConfig { .. } | Self::InvalidTemplate { .. } => {
                exit_code::INVALID_CONFIG
            }
        }
    }
}
