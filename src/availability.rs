//! Advisory check that a template's program is on PATH.
//!
//! This is a heuristic. It never blocks execution, it only produces a warning.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Found(PathBuf),
    Missing(String),
    /// No word in the template looked like a program name.
    Unknown,
}

/// Pick the word in `template` that most likely names the program to run.
///
/// Placeholders, flags, assignments, shell operators and anything that looks
/// like a path are skipped.
#[must_use]
pub fn program_name(template: &str) -> Option<&str> {
    template
        .split_whitespace()
        .map(|tok| tok.trim_matches(|c| c == '"' || c == '\''))
        .find(|tok| {
            !tok.is_empty()
                && !tok.contains(['&', ';', '>', '|'])
                && !tok.starts_with('{')
                && !tok.starts_with('-')
                && !tok.contains('=')
                && !tok.contains(['/', '\\', '.'])
        })
}

/// Look up the program a template invokes.
#[must_use]
pub fn check_template(template: &str) -> Availability {
    match program_name(template) {
        Some(program) => match which::which(program) {
            Ok(path) => Availability::Found(path),
            Err(_) => Availability::Missing(program.to_string()),
        },
        None => Availability::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_first_word() {
        assert_eq!(program_name("python3 \"{file}\""), Some("python3"));
        assert_eq!(program_name("dotnet fsi \"{file}\""), Some("dotnet"));
    }

    #[test]
    fn test_program_name_skips_placeholders_and_flags() {
        assert_eq!(program_name("\"{run_path}\""), None);
        assert_eq!(program_name("-x FOO=1 erl -noshell"), Some("erl"));
        assert_eq!(program_name("./build.sh && make"), Some("make"));
    }

    #[test]
    fn test_check_missing_program() {
        let result = check_template("definitely-not-a-real-compiler-xyz \"{file}\"");
        assert_eq!(
            result,
            Availability::Missing("definitely-not-a-real-compiler-xyz".to_string())
        );
    }

    #[test]
    fn test_check_unknown_is_not_missing() {
        assert_eq!(check_template("\"{file}\""), Availability::Unknown);
    }

    #[cfg(unix)]
    #[test]
    fn test_check_found_program() {
        assert!(matches!(check_template("sh -c true"), Availability::Found(_)));
    }
}
