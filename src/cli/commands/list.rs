//! List command implementation.
//!
//! `hocr-spec --list <CATEGORY>` prints one name per line.

use std::io::Write;
use std::path::PathBuf;

use crate::config::load_profiles;
use crate::error::Result;
use crate::spec::{list, Category};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    category: Category,
    profiles: Option<PathBuf>,
}

impl ListCommand {
    /// Create a new list command. Profiles from `profiles` are listed after
    /// the built-in ones.
    pub fn new(category: Category, profiles: Option<PathBuf>) -> Self {
        Self { category, profiles }
    }

    fn names(&self) -> Result<Vec<String>> {
        match (self.category, &self.profiles) {
            (Category::Profiles, Some(path)) => Ok(load_profiles(path)?
                .names()
                .into_iter()
                .map(String::from)
                .collect()),
            (category, _) => Ok(list(category)),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        for name in self.names()? {
            writeln!(out, "{}", name)?;
        }
        Ok(CommandResult::success())
    }
}
