//! Shell completion script generation.

use clap::ValueEnum;

const BASH_COMPLETION: &str = r#"#!/usr/bin/env bash
# bash completion for coderun

_coderun_complete() {
    local cur prev
    cur="${COMP_WORDS[COMP_CWORD]}"
    prev="${COMP_WORDS[COMP_CWORD-1]}"

    case "$prev" in
        --cwd)
            COMPREPLY=( $(compgen -d -- "$cur") )
            return 0
            ;;
        --config)
            COMPREPLY=( $(compgen -f -- "$cur") )
            return 0
            ;;
        --generate-completion)
            COMPREPLY=( $(compgen -W "bash zsh fish" -- "$cur") )
            return 0
            ;;
    esac

    if [[ "$cur" == -* ]]; then
        COMPREPLY=( $(compgen -W "--yes -y --cwd --no-shell --list -l --config --no-banner --generate-completion --help --version" -- "$cur") )
        return 0
    fi

    COMPREPLY=( $(compgen -f -- "$cur") )
}

complete -o filenames -F _coderun_complete coderun
"#;

const ZSH_COMPLETION: &str = r"#compdef coderun
# zsh completion for coderun

_arguments \
    '(-y --yes)'{-y,--yes}'[skip confirmation]' \
    '--cwd[working directory]:directory:_files -/' \
    '--no-shell[run without a shell]' \
    '(-l --list)'{-l,--list}'[list supported extensions]' \
    '--config[registry override file]:file:_files' \
    '--no-banner[do not print the banner]' \
    '--generate-completion[print completion script]:shell:(bash zsh fish)' \
    '(- *)--help[show help]' \
    '(- *)--version[show version]' \
    '1:source file:_files'
";

const FISH_COMPLETION: &str = r"# fish completion for coderun

complete -c coderun -s y -l yes -d 'Skip confirmation'
complete -c coderun -l cwd -r -a '(__fish_complete_directories)' -d 'Working directory'
complete -c coderun -l no-shell -d 'Run without a shell'
complete -c coderun -s l -l list -d 'List supported extensions'
complete -c coderun -l config -r -F -d 'Registry override file'
complete -c coderun -l no-banner -d 'Do not print the banner'
complete -c coderun -l generate-completion -x -a 'bash zsh fish' -d 'Print completion script'
";

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    #[must_use]
    pub fn completion_script(self) -> &'static str {
        match self {
            Shell::Bash => BASH_COMPLETION,
            Shell::Zsh => ZSH_COMPLETION,
            Shell::Fish => FISH_COMPLETION,
        }
    }
}

/// Print the completion script for `shell` to stdout.
pub fn generate_completion_script(shell: Shell) {
    print!("{}", shell.completion_script());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_mention_every_flag() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            let script = shell.completion_script();
            for flag in ["yes", "cwd", "no-shell", "list", "config", "no-banner"] {
                assert!(script.contains(flag), "{shell:?} missing {flag}");
            }
        }
    }

    #[test]
    fn test_bash_registers_function() {
        assert!(BASH_COMPLETION.contains("complete -o filenames -F _coderun_complete coderun"));
    }
}
