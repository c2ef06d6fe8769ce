//! Registry override files: discovery and loading.
//!
//! An override file is a JSON object mapping extensions to either a template
//! string or a `{"compile": ..., "run": ...}` pair.

use crate::error::RunnerError;
use crate::registry::{CommandSpec, Registry};
use crate::template::unknown_placeholders;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for in the current directory and its parents.
pub const PROJECT_CONFIG_NAME: &str = ".coderun.json";

/// Set to `1` to ignore `~/.coderun.json`.
pub const NO_GLOBAL_CONFIG_ENV: &str = "CODERUN_NO_GLOBAL_CONFIG";

/// Get the user's home directory in a cross-platform way.
pub fn get_home_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home));
    }

    if let Some(userprofile) = std::env::var_os("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }

    if let (Some(homedrive), Some(homepath)) =
        (std::env::var_os("HOMEDRIVE"), std::env::var_os("HOMEPATH"))
    {
        let mut path = PathBuf::from(homedrive);
        path.push(homepath);
        return Some(path);
    }

    None
}

fn global_config_disabled() -> bool {
    std::env::var(NO_GLOBAL_CONFIG_ENV).is_ok_and(|v| v == "1")
}

/// Search `start` and its parents for a project config, stopping at `home`
/// or the filesystem root. `home` itself is not searched, its file is the
/// global config.
#[must_use]
pub fn find_project_config(start: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if home.is_some_and(|h| current == h) {
            return None;
        }

        let candidate = current.join(PROJECT_CONFIG_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// The config files that apply, lowest precedence first.
#[must_use]
pub fn discover_config_files() -> Vec<PathBuf> {
    let home = get_home_dir();
    let mut files = Vec::new();

    if !global_config_disabled()
        && let Some(ref home) = home
    {
        let global = home.join(PROJECT_CONFIG_NAME);
        if global.is_file() {
            files.push(global);
        }
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(project) = find_project_config(&cwd, home.as_deref())
    {
        files.push(project);
    }

    files
}

/// Parse one override file.
///
/// # Errors
/// Returns `InvalidConfig` if the file cannot be read, is not valid JSON of
/// the expected shape, or uses an unknown placeholder.
pub fn load_overrides(path: &Path) -> Result<HashMap<String, CommandSpec>, RunnerError> {
    let invalid = |message: String| RunnerError::InvalidConfig {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let entries: HashMap<String, CommandSpec> =
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;

    for (ext, spec) in &entries {
        for template in spec.templates() {
            let unknown = unknown_placeholders(template);
            if !unknown.is_empty() {
                return Err(invalid(format!(
                    "entry '{ext}' uses unknown placeholder {}",
                    unknown.join(", ")
                )));
            }
        }
    }

    Ok(entries)
}

/// Build the registry: built-ins, then each override file in order.
///
/// With `explicit` set, only that file is applied and it must exist.
///
/// # Errors
/// Returns `InvalidConfig` for the first file that fails to load.
pub fn load_registry(explicit: Option<&Path>) -> Result<Registry, RunnerError> {
    let files = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => discover_config_files(),
    };

    let mut registry = Registry::builtin();
    for file in &files {
        let overrides = load_overrides(file)?;
        tracing::debug!(
            path = %file.display(),
            entries = overrides.len(),
            "loaded registry overrides"
        );
        registry.extend(overrides);
    }
    tracing::debug!(entries = registry.len(), "registry ready");
    Ok(registry)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resolver::Extension;

    #[test]
    fn test_load_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_NAME);
        fs::write(
            &path,
            r#"{"py": "pypy3 {file}", "foo": {"compile": "fooc {file}", "run": "{run_path}"}}"#,
        )
        .unwrap();

        let registry = load_registry(Some(&path)).unwrap();
        assert_eq!(
            registry.lookup(&Extension::Key("py".to_string())).ok(),
            Some(&CommandSpec::SingleStep("pypy3 {file}".to_string()))
        );
        assert!(registry.lookup(&Extension::Key("foo".to_string())).is_ok());
        assert!(registry.lookup(&Extension::Key("c".to_string())).is_ok());
    }

    #[test]
    fn test_unknown_placeholder_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"py": "python3 {source}"}"#).unwrap();

        let err = load_overrides(&path).unwrap_err();
        assert!(matches!(err, RunnerError::InvalidConfig { .. }));
        assert!(err.to_string().contains("{source}"));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            load_overrides(&path),
            Err(RunnerError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_registry(Some(Path::new("/no/such/config.json")));
        assert!(matches!(err, Err(RunnerError::InvalidConfig { .. })));
    }

    #[test]
    fn test_find_project_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_NAME), "{}").unwrap();

        assert_eq!(
            find_project_config(&nested, None),
            Some(root.path().join(PROJECT_CONFIG_NAME))
        );
    }

    #[test]
    fn test_find_project_config_stops_at_home() {
        let root = tempfile::tempdir().unwrap();
        let home = root.path().join("home");
        let nested = home.join("project");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_NAME), "{}").unwrap();

        assert_eq!(find_project_config(&nested, Some(&home)), None);
    }
}
