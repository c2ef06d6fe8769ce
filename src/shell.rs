//! Turning templates into child processes.

use crate::context::PlaceholderContext;
use crate::error::RunnerError;
use crate::registry::CommandSpec;
use crate::template;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// How resolved commands reach the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecMode {
    /// Pass the substituted string to the platform shell.
    #[default]
    Shell,
    /// Split the template into arguments first and spawn the program directly.
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRole {
    Single,
    Compile,
    Run,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Shell(String),
    Direct(Vec<String>),
}

impl Invocation {
    /// The command as shown to the user.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Shell(line) => line.clone(),
            Self::Direct(argv) => shell_words::join(argv),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub role: StepRole,
    pub template: String,
    pub invocation: Invocation,
}

/// Resolved steps plus the directory they run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<Step>,
    pub cwd: PathBuf,
}

/// Substitute the context into every template of `spec`.
///
/// # Errors
/// In direct mode, returns `InvalidTemplate` if a template cannot be split
/// into arguments or is empty.
pub fn plan(
    spec: &CommandSpec,
    ctx: &PlaceholderContext,
    mode: ExecMode,
) -> Result<Plan, RunnerError> {
    let roles: &[StepRole] = match spec {
        CommandSpec::SingleStep(_) => &[StepRole::Single],
        CommandSpec::TwoStep { .. } => &[StepRole::Compile, StepRole::Run],
    };

    let steps = roles
        .iter()
        .zip(spec.templates())
        .map(|(role, tmpl)| -> Result<Step, RunnerError> {
            Ok(Step {
                role: *role,
                template: tmpl.to_string(),
                invocation: resolve(tmpl, ctx, mode)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Plan {
        steps,
        cwd: ctx.cwd.clone(),
    })
}

fn resolve(
    tmpl: &str,
    ctx: &PlaceholderContext,
    mode: ExecMode,
) -> Result<Invocation, RunnerError> {
    match mode {
        ExecMode::Shell => Ok(Invocation::Shell(template::substitute(tmpl, ctx))),
        ExecMode::Direct => {
            let argv =
                template::substitute_argv(tmpl, ctx).map_err(|e| RunnerError::InvalidTemplate {
                    template: tmpl.to_string(),
                    message: e.to_string(),
                })?;
            if argv.is_empty() {
                return Err(RunnerError::InvalidTemplate {
                    template: tmpl.to_string(),
                    message: "no program to run".to_string(),
                });
            }
            Ok(Invocation::Direct(argv))
        }
    }
}

/// Something that can run an invocation to completion and report its exit code.
pub trait CommandRunner {
    /// # Errors
    /// Returns an error if the process could not be started.
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> io::Result<i32>;
}

/// Spawns real child processes with inherited standard streams.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> io::Result<i32> {
        let mut cmd = match invocation {
            Invocation::Shell(line) => shell_command(line),
            Invocation::Direct(argv) => {
                let (program, args) = argv
                    .split_first()
                    .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
        };

        let status = cmd
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(exit_code(status))
    }
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // cmd.exe does its own quote parsing, so the line must reach it unescaped
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(line);
    cmd
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

/// Exit code of a finished child. Signals map to `128 + signal` on Unix.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Run the plan's steps in order, stopping at the first non-zero exit.
///
/// # Errors
/// `CompileFailed` or `RunFailed` carrying the child's code, or `Spawn` if a
/// process could not be started.
pub fn execute(plan: &Plan, runner: &mut impl CommandRunner) -> Result<(), RunnerError> {
    for step in &plan.steps {
        tracing::debug!(
            role = ?step.role,
            command = %step.invocation.display(),
            cwd = %plan.cwd.display(),
            "spawning"
        );

        let code = runner
            .run(&step.invocation, &plan.cwd)
            .map_err(|source| RunnerError::Spawn {
                command: step.invocation.display(),
                source,
            })?;

        tracing::debug!(role = ?step.role, code, "step finished");

        if code != 0 {
            return Err(match step.role {
                StepRole::Compile => RunnerError::CompileFailed(code),
                StepRole::Single | StepRole::Run => RunnerError::RunFailed(code),
            });
        }
    }
    Ok(())
}
