//! The extension → command template table.

use crate::error::RunnerError;
use crate::resolver::{Extension, normalize_key};
use serde::Deserialize;
use std::collections::HashMap;

/// How to run a file of a given type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CommandSpec {
    /// A single command, for interpreted languages.
    SingleStep(String),
    /// Compile, then run only if compilation exited with 0.
    TwoStep { compile: String, run: String },
}

impl CommandSpec {
    fn single(template: &str) -> Self {
        Self::SingleStep(template.to_string())
    }

    fn two(compile: &str, run: &str) -> Self {
        Self::TwoStep {
            compile: compile.to_string(),
            run: run.to_string(),
        }
    }

    /// Templates in execution order.
    #[must_use]
    pub fn templates(&self) -> Vec<&str> {
        match self {
            Self::SingleStep(template) => vec![template.as_str()],
            Self::TwoStep { compile, run } => vec![compile.as_str(), run.as_str()],
        }
    }
}

const SINGLE_STEP: &[(&str, &str)] = &[
    ("py", "python3 \"{file}\""),
    ("js", "node \"{file}\""),
    ("ts", "ts-node \"{file}\""),
    ("php", "php \"{file}\""),
    ("pl", "perl \"{file}\""),
    ("p6", "perl6 \"{file}\""),
    ("rb", "ruby \"{file}\""),
    ("go", "go run \"{file}\""),
    ("lua", "lua \"{file}\""),
    ("groovy", "groovy \"{file}\""),
    ("ps1", "pwsh \"{file}\""),
    ("bat", "\"{file}\""),
    ("cmd", "\"{file}\""),
    ("sh", "bash \"{file}\""),
    ("fsx", "dotnet fsi \"{file}\""),
    ("csx", "dotnet script \"{file}\""),
    ("vbs", "cscript //nologo \"{file}\""),
    ("coffee", "coffee \"{file}\""),
    ("scala", "scala \"{file}\""),
    ("swift", "swift \"{file}\""),
    ("jl", "julia \"{file}\""),
    ("cr", "crystal run \"{file}\""),
    ("ml", "ocaml \"{file}\""),
    ("r", "Rscript \"{file}\""),
    ("applescript", "osascript \"{file}\""),
    ("exs", "elixir \"{file}\""),
    ("clj", "clojure \"{file}\""),
    ("hx", "haxe \"{file}\""),
    ("rkt", "racket \"{file}\""),
    ("scm", "scheme --script \"{file}\""),
    ("ahk", "autohotkey \"{file}\""),
    ("au3", "autoit3 \"{file}\""),
    ("dart", "dart \"{file}\""),
    ("hs", "runhaskell \"{file}\""),
    ("nim", "nim compile --run \"{file}\""),
    ("d", "ldc2 -run \"{file}\""),
    ("lisp", "sbcl --script \"{file}\""),
    ("v", "v run \"{file}\""),
    ("zig", "zig run \"{file}\""),
    ("mojo", "mojo run \"{file}\""),
    ("scss", "sass \"{file}\""),
    ("sass", "sass \"{file}\""),
    ("less", "lessc \"{file}\""),
    ("ring", "ring \"{file}\""),
    ("pkl", "pkl eval \"{file}\""),
    ("spwn", "spwn run \"{file}\""),
    ("kit", "kitc run \"{file}\""),
    ("gleam", "gleam run"),
];

const TWO_STEP: &[(&str, &str, &str)] = &[
    ("c", "gcc \"{file}\" -o \"{name}\"", "\"{run_path}\""),
    ("cpp", "g++ \"{file}\" -o \"{name}\"", "\"{run_path}\""),
    ("java", "javac \"{file}\"", "java -cp \"{cwd}\" {name}"),
    (
        "kt",
        "kotlinc \"{file}\" -include-runtime -d \"{name}.jar\"",
        "java -jar \"{name}.jar\"",
    ),
    ("cs", "mcs \"{file}\"", "mono \"{name}.exe\""),
    ("m", "clang \"{file}\" -o \"{name}\"", "\"{run_path}\""),
    ("rs", "rustc \"{file}\" -o \"{name}\"", "\"{run_path}\""),
    ("f90", "gfortran \"{file}\" -o \"{name}\"", "\"{run_path}\""),
    ("cuda", "nvcc \"{file}\" -o \"{name}\"", "\"{run_path}\""),
    ("pas", "fpc \"{file}\"", "\"{run_path}\""),
    ("vb", "vbc \"{file}\"", "mono \"{name}.exe\""),
    (
        "erl",
        "erlc \"{file}\"",
        "erl -noshell -s {name} start -s init stop",
    ),
];

/// Immutable once built; overrides are applied before it is handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: HashMap<String, CommandSpec>,
}

impl Registry {
    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = HashMap::with_capacity(SINGLE_STEP.len() + TWO_STEP.len());
        for (ext, template) in SINGLE_STEP {
            entries.insert((*ext).to_string(), CommandSpec::single(template));
        }
        for (ext, compile, run) in TWO_STEP {
            entries.insert((*ext).to_string(), CommandSpec::two(compile, run));
        }
        Self { entries }
    }

    /// Build a registry from arbitrary entries, normalizing their keys.
    #[must_use]
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, CommandSpec)>,
        K: AsRef<str>,
    {
        let mut registry = Self::default();
        registry.extend(entries);
        registry
    }

    /// Add or replace entries. Later entries win.
    pub fn extend<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, CommandSpec)>,
        K: AsRef<str>,
    {
        for (key, spec) in entries {
            self.entries.insert(normalize_key(key.as_ref()), spec);
        }
    }

    /// Look up the command for a resolved extension.
    ///
    /// # Errors
    /// Returns `UnsupportedExtension` when there is no entry for `ext`.
    pub fn lookup(&self, ext: &Extension) -> Result<&CommandSpec, RunnerError> {
        match ext {
            Extension::Key(key) => self
                .entries
                .get(key)
                .ok_or_else(|| RunnerError::UnsupportedExtension(key.clone())),
            Extension::None => Err(RunnerError::UnsupportedExtension(String::new())),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries sorted by extension.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &CommandSpec)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, spec)| (key.as_str(), spec))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
