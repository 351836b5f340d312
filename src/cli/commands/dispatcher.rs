//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the CLI to a command

use std::io::Write;

use crate::cli::args::Cli;
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches the parsed CLI to a command implementation.
pub struct CommandDispatcher;

impl CommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// `--completions` wins over `--list`, which wins over validation.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return super::completions::CompletionsCommand::new(shell).execute(out);
        }
        if let Some(category) = cli.list {
            let cmd = super::list::ListCommand::new(category, cli.profiles.clone());
            return cmd.execute(out);
        }
        let cmd = super::validate::ValidateCommand::from_cli(cli);
        cmd.execute(out)
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
