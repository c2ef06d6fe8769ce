//! # coderun
//!
//! Maps a source file's extension to a command template, fills in the
//! template and runs it.

pub mod availability;
pub mod cli;
pub mod completion;
pub mod config;
pub mod confirm;
pub mod context;
pub mod error;
pub mod executor;
pub mod output;
pub mod registry;
pub mod resolver;
pub mod shell;
pub mod template;
