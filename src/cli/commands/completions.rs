//! Shell completions generation.
//!
//! `hocr-spec --completions <SHELL>` generates shell completion scripts.

use std::io::Write;

use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::Shell;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "hocr-spec", out);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(shell: Shell) -> String {
        let mut buf = Vec::new();
        CompletionsCommand::new(shell).execute(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generates_bash_completions() {
        let output = generate(Shell::Bash);
        assert!(output.contains("hocr-spec"));
        assert!(output.contains("complete"));
        assert!(output.contains("--implicit-capabilities"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(generate(Shell::Zsh).contains("hocr-spec"));
    }

    #[test]
    fn generates_fish_completions() {
        assert!(generate(Shell::Fish).contains("hocr-spec"));
    }
}
