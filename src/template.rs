//! Command template parsing and placeholder substitution.
//!
//! A template is plain text with `{file}`, `{name}`, `{cwd}` and `{run_path}`
//! placeholders. Values are inserted verbatim, without any quoting.

use crate::context::PlaceholderContext;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "template.pest"]
struct TemplateParser;

/// One of the four recognized placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    File,
    Name,
    Cwd,
    RunPath,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [Self::File, Self::Name, Self::Cwd, Self::RunPath];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Name => "name",
            Self::Cwd => "cwd",
            Self::RunPath => "run_path",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder),
    /// A `{word}` that is not a recognized placeholder, kept verbatim.
    Unknown(&'a str),
}

/// Split a template into literal text and placeholders.
#[must_use]
pub fn segments(template: &str) -> Vec<Segment<'_>> {
    let Ok(mut pairs) = TemplateParser::parse(Rule::template, template) else {
        // The grammar accepts any input; keep the text as-is if that ever changes.
        return vec![Segment::Literal(template)];
    };
    let Some(root) = pairs.next() else {
        return Vec::new();
    };

    root.into_inner()
        .filter_map(|pair| match pair.as_rule() {
            Rule::placeholder => pair
                .into_inner()
                .next()
                .and_then(|key| Placeholder::from_key(key.as_str()))
                .map(Segment::Placeholder),
            Rule::unknown => Some(Segment::Unknown(pair.as_str())),
            Rule::literal => Some(Segment::Literal(pair.as_str())),
            _ => None,
        })
        .collect()
}

/// Replace every recognized placeholder in `template` with its context value.
#[must_use]
pub fn substitute(template: &str, ctx: &PlaceholderContext) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) | Segment::Unknown(text) => out.push_str(text),
            Segment::Placeholder(p) => out.push_str(&ctx.value(p)),
        }
    }
    out
}

/// `{word}` occurrences in `template` that are not recognized placeholders.
#[must_use]
pub fn unknown_placeholders(template: &str) -> Vec<&str> {
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Unknown(text) => Some(text),
            _ => None,
        })
        .collect()
}

/// Split a template into arguments using shell quoting rules, then substitute
/// placeholders inside each argument. Values never get re-split.
///
/// # Errors
/// Returns an error if the template has unbalanced quotes.
pub fn substitute_argv(
    template: &str,
    ctx: &PlaceholderContext,
) -> Result<Vec<String>, shell_words::ParseError> {
    Ok(shell_words::split(template)?
        .iter()
        .map(|word| substitute(word, ctx))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ctx() -> PlaceholderContext {
        PlaceholderContext {
            file: PathBuf::from("/tmp/hello.c"),
            name: "hello".to_string(),
            cwd: PathBuf::from("/tmp"),
            run_path: PathBuf::from("/tmp/hello"),
        }
    }

    #[test]
    fn test_substitute_all_placeholders() {
        let out = substitute("{file} {name} {cwd} {run_path}", &ctx());
        assert_eq!(out, "/tmp/hello.c hello /tmp /tmp/hello");
    }

    #[test]
    fn test_substitute_repeated_placeholder() {
        assert_eq!(substitute("{name}-{name}", &ctx()), "hello-hello");
    }

    #[test]
    fn test_substitute_is_idempotent() {
        let once = substitute("gcc \"{file}\" -o \"{name}\" && \"{run_path}\"", &ctx());
        let twice = substitute(&once, &ctx());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_placeholder_left_literal() {
        assert_eq!(substitute("echo {foo} {name}", &ctx()), "echo {foo} hello");
        assert_eq!(unknown_placeholders("echo {foo} {name} {bar}"), vec!["{foo}", "{bar}"]);
    }

    #[test]
    fn test_stray_braces_are_literal() {
        assert_eq!(substitute("awk '{ print }' {file", &ctx()), "awk '{ print }' {file");
        assert_eq!(substitute("{{name}}", &ctx()), "{hello}");
        assert!(unknown_placeholders("awk '{ print }'").is_empty());
    }

    #[test]
    fn test_empty_template() {
        assert!(segments("").is_empty());
        assert_eq!(substitute("", &ctx()), "");
    }

    #[test]
    fn test_segments() {
        assert_eq!(
            segments("java -cp {cwd} {name}"),
            vec![
                Segment::Literal("java -cp "),
                Segment::Placeholder(Placeholder::Cwd),
                Segment::Literal(" "),
                Segment::Placeholder(Placeholder::Name),
            ]
        );
    }

    #[test]
    fn test_argv_keeps_values_whole() {
        let mut c = ctx();
        c.file = PathBuf::from("/tmp/my dir/a;rm -rf x.c");
        let argv = substitute_argv("gcc \"{file}\" -o {name}", &c).unwrap_or_default();
        assert_eq!(argv, vec!["gcc", "/tmp/my dir/a;rm -rf x.c", "-o", "hello"]);
    }

    #[test]
    fn test_argv_unbalanced_quotes() {
        assert!(substitute_argv("gcc \"{file}", &ctx()).is_err());
    }
}
