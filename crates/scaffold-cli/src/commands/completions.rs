//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, `PowerShell` and elvish.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use scaffold_core::cli::ExitCode;
use std::io::{self, Write};
use tracing::debug;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap::CommandFactory;
/// use clap_complete::Shell;
/// use scaffold_cli::{Cli, commands::completions};
///
/// let mut script = Vec::new();
/// completions::write_completions(Shell::Bash, &mut Cli::command(), &mut script);
/// assert!(String::from_utf8(script).unwrap().contains("scaffold"));
/// ```
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    debug!(%shell, "generating completions");
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Errors
///
/// Never fails.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    write_completions(shell, cmd, &mut io::stdout().lock());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        write_completions(shell, &mut Cli::command(), &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_completions_for_every_shell() {
        for shell in [
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Elvish,
        ] {
            assert!(!script(shell).is_empty(), "empty script for {shell}");
        }
    }

    #[test]
    fn test_completions_mention_subcommands() {
        let bash = script(Shell::Bash);
        for sub in ["api", "component", "test", "config"] {
            assert!(bash.contains(sub), "missing {sub}");
        }
    }
}
