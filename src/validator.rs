//! Validation entry points.
//!
//! A [`Validator`] binds an immutable [`Profile`] to a [`CheckRegistry`] and
//! turns documents into [`Report`]s. It holds no per-run state, so one
//! validator can check any number of documents.
//!
//! # Example
//!
//! ```
//! use hocr_spec::document::ParseMode;
//! use hocr_spec::spec::Profile;
//! use hocr_spec::validator::Validator;
//!
//! let validator = Validator::new(Profile::default().with_implicit_capabilities(["*"]));
//! let report = validator
//!     .validate_str("<html><body></body></html>", ParseMode::Lenient, "empty.hocr")
//!     .unwrap();
//! assert!(!report.is_valid());
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::checks::{CheckContext, CheckRegistry};
use crate::document::{Document, DocumentIndex, ParseMode};
use crate::error::{HocrError, Result};
use crate::report::Report;
use crate::spec::Profile;

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// `-` means standard input.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::Path(PathBuf::from(arg))
        }
    }

    /// Name used in reports when no override is given.
    pub fn display_name(&self) -> String {
        match self {
            Source::Stdin => "-".to_string(),
            Source::Path(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        let bytes = match self {
            Source::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context("Failed to read standard input")?;
                bytes
            }
            Source::Path(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

/// Runs the enabled checks of a profile over documents.
pub struct Validator {
    profile: Profile,
    registry: CheckRegistry,
}

impl Validator {
    /// Validator with all built-in checks.
    pub fn new(profile: Profile) -> Self {
        Self::with_registry(profile, CheckRegistry::with_builtins())
    }

    pub fn with_registry(profile: Profile, registry: CheckRegistry) -> Self {
        Self { profile, registry }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Check an already parsed document.
    ///
    /// Stops at the first `FATAL` finding and returns what was recorded up
    /// to that point.
    pub fn validate_document(&self, document: &Document, filename: &str) -> Report {
        let index = DocumentIndex::build(document);
        let ctx = CheckContext::new(&index, &self.profile);
        let mut report = Report::new(filename);

        for check in self.registry.iter() {
            if self.profile.skips(check.kind()) {
                tracing::debug!(check = check.name(), "Skipping check");
                continue;
            }
            tracing::debug!(check = check.name(), filename, "Running check");
            if let Err(abort) = check.run(&ctx, &mut report) {
                tracing::error!(check = check.name(), filename, "Validation errored: {}", abort);
                break;
            }
        }

        tracing::debug!(
            filename,
            items = report.items().len(),
            valid = report.is_valid(),
            "Validation finished"
        );
        report
    }

    /// Parse and check markup held in memory.
    pub fn validate_str(&self, text: &str, mode: ParseMode, filename: &str) -> Result<Report> {
        let document = Document::parse(text, mode).map_err(|e| HocrError::DocumentParse {
            name: filename.to_string(),
            line: e.line,
            message: e.message,
        })?;
        Ok(self.validate_document(&document, filename))
    }

    /// Read, parse and check a source. `filename` overrides the name used in
    /// the report.
    pub fn validate_source(
        &self,
        source: &Source,
        mode: ParseMode,
        filename: Option<&str>,
    ) -> Result<Report> {
        let name = filename
            .map(String::from)
            .unwrap_or_else(|| source.display_name());
        let text = source.read()?;
        self.validate_str(&text, mode, &name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Check;
    use crate::report::{Abort, Level};
    use crate::spec::CheckKind;
    use std::io::Write;

    struct Failing;

    impl Check for Failing {
        fn kind(&self) -> CheckKind {
            CheckKind::Attributes
        }
        fn name(&self) -> &str {
            "Failing"
        }
        fn description(&self) -> &str {
            "Records an error then a fatal item"
        }
        fn run(
            &self,
            _ctx: &CheckContext<'_>,
            report: &mut Report,
        ) -> std::result::Result<(), Abort> {
            report.error(1, "before")?;
            report.fatal(0, "broken")?;
            report.error(2, "after")
        }
    }

    #[test]
    fn fatal_stops_remaining_checks() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(Failing));
        registry.register(Box::new(crate::checks::ClassesCheck));
        let validator = Validator::with_registry(Profile::default(), registry);

        let report = validator
            .validate_str("<html/>", ParseMode::Lenient, "t.hocr")
            .unwrap();

        let messages: Vec<_> = report.items().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["before", "broken"]);
        assert_eq!(report.items()[1].level, Level::Fatal);
    }

    #[test]
    fn skipped_checks_do_not_run() {
        let profile = Profile::default().with_skip_check([CheckKind::Classes, CheckKind::Metadata]);
        let validator = Validator::new(profile);
        let report = validator
            .validate_str("<html/>", ParseMode::Lenient, "t.hocr")
            .unwrap();
        assert!(report.items().is_empty());
        assert!(report.is_valid());
    }

    #[test]
    fn strict_parse_failure_names_source() {
        let validator = Validator::new(Profile::default());
        let err = validator
            .validate_str("<div>\n<p></div>", ParseMode::Strict, "broken.hocr")
            .unwrap_err();
        assert!(matches!(err, HocrError::DocumentParse { ref name, .. } if name == "broken.hocr"));
    }

    #[test]
    fn reads_from_path_and_overrides_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html></html>").unwrap();
        let validator = Validator::new(Profile::default().with_skip_check([CheckKind::Metadata]));

        let source = Source::from(file.path());
        let report = validator
            .validate_source(&source, ParseMode::Lenient, None)
            .unwrap();
        assert_eq!(report.filename(), file.path().display().to_string());

        let report = validator
            .validate_source(&source, ParseMode::Lenient, Some("page.hocr"))
            .unwrap();
        assert_eq!(report.filename(), "page.hocr");
    }

    #[test]
    fn missing_file_names_the_path() {
        let validator = Validator::new(Profile::default());
        let source = Source::parse("/nonexistent/page.hocr");
        let err = validator
            .validate_source(&source, ParseMode::Lenient, None)
            .unwrap_err();
        assert!(matches!(err, HocrError::Other(_)));
        assert_eq!(err.to_string(), "Failed to read /nonexistent/page.hocr");
    }

    #[test]
    fn dash_is_stdin() {
        assert_eq!(Source::parse("-"), Source::Stdin);
        assert_eq!(Source::Stdin.display_name(), "-");
    }
}
