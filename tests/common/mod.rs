//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    if let Some(path) = option_env!("CARGO_BIN_EXE_coderun") {
        return PathBuf::from(path);
    }

    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop();
    }

    path.push("coderun");
    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Write `content` to `dir/name` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Write a registry override file and return its path
pub fn write_config(dir: &Path, json: &str) -> PathBuf {
    write_file(dir, "registry.json", json)
}

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper to create a Command isolated from the user's ~/.coderun.json
pub fn test_command(binary: &Path, home: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env("CODERUN_NO_GLOBAL_CONFIG", "1")
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Run a prepared command, feeding `stdin` to it
pub fn run_with_input(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn coderun");

    // The child may exit without reading, so a broken pipe is fine here
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("Failed to wait for coderun")
}
