//! CLI module containing the main entry point logic.

use crate::error::{RunnerError, exit_code};
use crate::executor::{self, RunOptions};
use crate::output::{self, Printer};
use crate::shell::{ExecMode, SystemRunner};
use crate::{completion, config};
use clap::Parser as ClapParser;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for coderun.
#[derive(ClapParser, Debug)]
#[command(name = "coderun")]
#[command(version = PKG_VERSION)]
#[command(about = "Run or compile-and-run a source file based on its extension", long_about = None)]
struct Cli {
    /// Source file to run
    #[arg(value_name = "FILE", required_unless_present_any = ["list", "generate_completion"])]
    file: Option<PathBuf>,

    /// Don't ask for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Working directory to run in (default: the file's directory)
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// Spawn the compiler/runtime directly instead of through a shell
    #[arg(long)]
    no_shell: bool,

    /// List supported extensions and their commands
    #[arg(short, long)]
    list: bool,

    /// Registry override file (replaces .coderun.json discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Don't print the banner
    #[arg(long)]
    no_banner: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    generate_completion: Option<completion::Shell>,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            assume_yes: self.yes,
            cwd: self.cwd.clone(),
            mode: if self.no_shell {
                ExecMode::Direct
            } else {
                ExecMode::Shell
            },
            banner: !self.no_banner,
        }
    }
}

/// Main CLI logic. Returns the process exit code.
pub fn run_cli() -> i32 {
    let cli = Cli::parse();
    output::init_logging();

    if let Some(shell) = cli.generate_completion {
        completion::generate_completion_script(shell);
        return exit_code::SUCCESS;
    }

    let mut printer = Printer::stdio();
    match dispatch(&cli, &mut printer) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            printer.error(&e.to_string());
            e.exit_code()
        }
    }
}

fn dispatch(
    cli: &Cli,
    printer: &mut Printer<std::io::Stdout, std::io::Stderr>,
) -> Result<(), RunnerError> {
    let registry = config::load_registry(cli.config.as_deref())?;

    if cli.list {
        executor::list_extensions(&registry, printer);
        return Ok(());
    }

    let Some(ref file) = cli.file else {
        // clap enforces FILE unless --list or --generate-completion is given
        return Ok(());
    };

    let stdin = std::io::stdin();
    executor::run_file(
        &registry,
        file,
        &cli.run_options(),
        &mut stdin.lock(),
        printer,
        &mut SystemRunner,
    )
}
