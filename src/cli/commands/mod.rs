//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which picks one
//! command from the parsed flags:
//! - [`completions`] for `--completions`
//! - [`list`] for `--list`
//! - [`validate`] otherwise

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
