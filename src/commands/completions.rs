//! Shell completion script generation

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::{generate, Shell};

/// Generate the completion script for `shell`
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8
pub fn execute(shell: Shell, mut cmd: Command) -> Result<String> {
    let bin_name = cmd.get_name().to_string();
    let mut script = Vec::new();
    generate(shell, &mut cmd, bin_name, &mut script);

    String::from_utf8(script).context("Completion script is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    #[test]
    fn test_bash_script_mentions_binary_and_subcommands() {
        let cmd = Command::new("cli-actions")
            .subcommand(Command::new("chunks").arg(Arg::new("size").long("size")));

        let script = execute(Shell::Bash, cmd).expect("Should generate script");
        assert!(script.contains("cli-actions"));
        assert!(script.contains("chunks"));
        assert!(script.contains("--size"));
    }
}
