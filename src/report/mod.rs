//! Validation reports.
//!
//! A [`Report`] is the ordered list of findings for one document. Findings
//! are only ever appended. Validity depends on nothing but the levels of the
//! recorded items: a report is valid when it holds no `ERROR` and no
//! `FATAL`.
//!
//! Appending a `FATAL` item returns [`Abort`], which the checks propagate
//! with `?` so the rest of the run is skipped while everything recorded so
//! far is kept.
//!
//! # Example
//!
//! ```
//! use hocr_spec::report::{Level, Report};
//!
//! let mut report = Report::new("page.hocr");
//! report.warn(3, "deprecated").unwrap();
//! assert!(report.is_valid());
//!
//! report.error(0, "At least one ocr_page must exist").unwrap();
//! assert!(!report.is_valid());
//!
//! assert!(report.add(Level::Fatal, 0, "inconsistent tables").is_err());
//! assert_eq!(report.items().len(), 3);
//! ```

pub mod output;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Severity of a report item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Success marker, only produced for display.
    Ok,
    /// Informational, never affects validity.
    Debug,
    /// Deprecated or shallow-checked construct.
    Warn,
    /// Spec violation.
    Error,
    /// Internal inconsistency, stops the run.
    Fatal,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Debug => "DEBUG",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Whether items of this level make a document invalid.
    pub fn is_failure(self) -> bool {
        matches!(self, Level::Error | Level::Fatal)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportItem {
    pub level: Level,
    /// Source line, 0 for findings about the whole document.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ReportItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] +{} : {}", self.level, self.line, self.message)
    }
}

/// Raised when a `FATAL` item is appended.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation hit a FATAL issue: {item}")]
pub struct Abort {
    pub item: ReportItem,
}

/// Findings for one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    filename: String,
    items: Vec<ReportItem>,
}

impl Report {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            items: Vec::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn items(&self) -> &[ReportItem] {
        &self.items
    }

    /// Append a finding. Fails with [`Abort`] after recording a `FATAL`.
    pub fn add(
        &mut self,
        level: Level,
        line: usize,
        message: impl Into<String>,
    ) -> Result<(), Abort> {
        let item = ReportItem {
            level,
            line,
            message: message.into(),
        };
        self.items.push(item.clone());
        if level == Level::Fatal {
            return Err(Abort { item });
        }
        Ok(())
    }

    pub fn debug(&mut self, line: usize, message: impl Into<String>) -> Result<(), Abort> {
        self.add(Level::Debug, line, message)
    }

    pub fn warn(&mut self, line: usize, message: impl Into<String>) -> Result<(), Abort> {
        self.add(Level::Warn, line, message)
    }

    pub fn error(&mut self, line: usize, message: impl Into<String>) -> Result<(), Abort> {
        self.add(Level::Error, line, message)
    }

    pub fn fatal(&mut self, line: usize, message: impl Into<String>) -> Result<(), Abort> {
        self.add(Level::Fatal, line, message)
    }

    pub fn is_valid(&self) -> bool {
        !self.items.iter().any(|item| item.level.is_failure())
    }

    /// Number of items at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.items.iter().filter(|item| item.level == level).count()
    }
}
