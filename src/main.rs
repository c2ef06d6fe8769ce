//! # coderun
//!
//! Run a source file, or compile it and run the result, picking the command
//! from the file's extension.
//!
//! ## Usage
//!
//! - Run a script: `coderun hello.py`
//! - Skip the confirmation prompt: `coderun hello.c --yes`
//! - Run somewhere else: `coderun src/Main.java --cwd build`
//! - See what is supported: `coderun --list`
//!
//! See README.md for more details.

/// Entry point for the CLI tool.
fn main() {
    std::process::exit(coderun::cli::run_cli());
}
