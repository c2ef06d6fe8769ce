//! Running a source file end to end.

use crate::availability::{self, Availability};
use crate::confirm;
use crate::context::PlaceholderContext;
use crate::error::RunnerError;
use crate::output::Printer;
use crate::registry::{CommandSpec, Registry};
use crate::resolver::resolve_extension;
use crate::shell::{self, CommandRunner, ExecMode};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Per-invocation settings taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub assume_yes: bool,
    pub cwd: Option<PathBuf>,
    pub mode: ExecMode,
    pub banner: bool,
}

/// Resolve, confirm and execute the command(s) for `path`.
///
/// # Errors
/// Any `RunnerError`: missing file, unsupported extension, declined or
/// unreadable confirmation, spawn failure, or a step that exited non-zero.
pub fn run_file<O: Write, E: Write>(
    registry: &Registry,
    path: &Path,
    options: &RunOptions,
    input: &mut impl BufRead,
    printer: &mut Printer<O, E>,
    runner: &mut impl CommandRunner,
) -> Result<(), RunnerError> {
    let ext = resolve_extension(path)?;
    let spec = registry.lookup(&ext)?;
    let ctx = PlaceholderContext::new(path, options.cwd.as_deref())?;
    let plan = shell::plan(spec, &ctx, options.mode)?;

    tracing::debug!(ext = %ext, steps = plan.steps.len(), cwd = %plan.cwd.display(), "resolved");

    if options.banner {
        printer.banner();
    }
    for step in &plan.steps {
        printer.running(&step.invocation.display());
    }

    if !options.assume_yes {
        if !confirm::ask(input, printer.out()).map_err(RunnerError::Prompt)? {
            return Err(RunnerError::UserCancelled);
        }
    }

    for step in &plan.steps {
        match availability::check_template(&step.template) {
            Availability::Found(path) => {
                tracing::debug!(program = %path.display(), "runtime found");
            }
            Availability::Missing(program) => printer.warn(&format!(
                "'{program}' may not be installed or on PATH. Proceeding anyway."
            )),
            Availability::Unknown => {}
        }
    }

    shell::execute(&plan, runner)?;
    printer.success();
    Ok(())
}

/// Print every supported extension with its template(s).
pub fn list_extensions<O: Write, E: Write>(registry: &Registry, printer: &mut Printer<O, E>) {
    printer.line("Supported extensions:");
    let entries = registry.sorted();
    let width = entries.iter().map(|(ext, _)| ext.len()).max().unwrap_or(0);
    for (ext, spec) in entries {
        match spec {
            CommandSpec::SingleStep(template) => {
                printer.line(&format!("  {ext:<width$}  {template}"));
            }
            CommandSpec::TwoStep { compile, run } => {
                printer.line(&format!("  {ext:<width$}  {compile}  =>  {run}"));
            }
        }
    }
}
