//! Terminal output: banner, coloured status lines and logging setup.

use std::io::{self, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

const BLUE: &str = "\x1b[1;34m";
const GREEN: &str = "\x1b[1;32m";
const YELLOW: &str = "\x1b[1;33m";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

pub const BANNER: &str = r"
   ___          _      ___
  / __|___   __| |___ | _ \_  _ _ _
 | (__/ _ \ / _` / -_)|   / || | ' \
  \___\___/ \__,_\___||_|_\\_,_|_||_|

   run or build a source file by its extension
";

/// Whether ANSI colours should be written to `stream`.
fn use_color(is_terminal: bool) -> bool {
    is_terminal && std::env::var_os("NO_COLOR").is_none()
}

fn paint(color: &str, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Writes user-facing messages, colouring them only on a terminal.
pub struct Printer<O: Write, E: Write> {
    out: O,
    err: E,
    out_color: bool,
    err_color: bool,
}

impl Printer<io::Stdout, io::Stderr> {
    #[must_use]
    pub fn stdio() -> Self {
        let out = io::stdout();
        let err = io::stderr();
        let out_color = use_color(out.is_terminal());
        let err_color = use_color(err.is_terminal());
        Self {
            out,
            err,
            out_color,
            err_color,
        }
    }
}

impl<O: Write, E: Write> Printer<O, E> {
    /// A printer without colours, for capturing output.
    pub fn plain(out: O, err: E) -> Self {
        Self {
            out,
            err,
            out_color: false,
            err_color: false,
        }
    }

    pub fn banner(&mut self) {
        let _ = writeln!(self.out, "{}", paint(BLUE, BANNER, self.out_color));
    }

    pub fn running(&mut self, command: &str) {
        let label = paint(GREEN, "▶ Running:", self.out_color);
        let _ = writeln!(self.out, "{label} {command}");
    }

    pub fn success(&mut self) {
        let msg = paint(
            GREEN,
            "✅ Command finished successfully (exit code 0).",
            self.out_color,
        );
        let _ = writeln!(self.out, "\n{msg}");
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    pub fn warn(&mut self, text: &str) {
        let msg = paint(YELLOW, &format!("⚠️  Warning: {text}"), self.err_color);
        let _ = writeln!(self.err, "{msg}");
    }

    pub fn error(&mut self, text: &str) {
        let msg = paint(RED, &format!("❌ {text}"), self.err_color);
        let _ = writeln!(self.err, "{msg}");
    }

    /// Stream the confirmation prompt is written to.
    pub fn out(&mut self) -> &mut O {
        &mut self.out
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Install the `tracing` subscriber. `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
