//! Document checks.
//!
//! Each check category is a [`Check`] that walks the hOCR tables, queries
//! the document through its [`DocumentIndex`] and records findings in a
//! [`Report`]. Categories run in a fixed order (attributes, classes,
//! metadata, properties) and can be skipped individually by the profile.
//!
//! # Example
//!
//! ```
//! use hocr_spec::checks::CheckRegistry;
//! use hocr_spec::spec::CheckKind;
//!
//! let registry = CheckRegistry::with_builtins();
//! let kinds: Vec<_> = registry.iter().map(|c| c.kind()).collect();
//! assert_eq!(kinds, CheckKind::ALL.to_vec());
//! ```

pub mod attributes;
pub mod classes;
pub mod metadata;
pub mod properties;

use std::fmt::Display;

use crate::document::{Document, DocumentIndex, Element};
use crate::report::{Abort, Level, Report};
use crate::spec::{CheckKind, Profile, VersionMarker, CAPABILITIES_FIELD};

pub use attributes::AttributesCheck;
pub use classes::ClassesCheck;
pub use metadata::MetadataCheck;
pub use properties::PropertiesCheck;

/// Everything a check may look at during one run.
pub struct CheckContext<'a> {
    pub document: &'a Document,
    pub index: &'a DocumentIndex<'a>,
    pub profile: &'a Profile,
    declared_capabilities: Vec<&'a str>,
}

impl<'a> CheckContext<'a> {
    pub fn new(index: &'a DocumentIndex<'a>, profile: &'a Profile) -> Self {
        let document = index.document();
        let declared_capabilities = index
            .with_tag("meta")
            .iter()
            .map(|&id| document.element(id))
            .find(|meta| meta.attr("name") == Some(CAPABILITIES_FIELD))
            .and_then(|meta| meta.attr("content"))
            .map(|content| content.split_whitespace().collect())
            .unwrap_or_default();

        Self {
            document,
            index,
            profile,
            declared_capabilities,
        }
    }

    /// Capabilities listed in the document's `ocr-capabilities` field.
    pub fn declared_capabilities(&self) -> &[&'a str] {
        &self.declared_capabilities
    }

    /// Whether the document may use `capability`.
    pub fn has_capability(&self, capability: &str) -> bool {
        self.profile.grants(capability) || self.declared_capabilities.contains(&capability)
    }

    /// Record an error on `element` unless `capability` is available.
    pub fn require_capability(
        &self,
        report: &mut Report,
        element: &Element,
        capability: &str,
    ) -> Result<(), Abort> {
        if self.has_capability(capability) {
            return Ok(());
        }
        report.error(
            element.line(),
            format!(
                "{}: Requires the \"{}\" capability but it is not specified",
                element, capability
            ),
        )
    }

    /// Warn or fail when the profile version has reached a deprecation or
    /// obsolescence marker.
    pub fn check_version(
        &self,
        report: &mut Report,
        element: &Element,
        subject: &dyn Display,
        deprecated: Option<VersionMarker>,
        obsolete: (Option<VersionMarker>, Level),
    ) -> Result<(), Abort> {
        if let Some(marker) = deprecated.filter(|m| self.profile.is_at_least(m.version)) {
            report.warn(
                element.line(),
                format!(
                    "{} {} has been deprecated since version {}: {}",
                    element, subject, marker.version, marker.message
                ),
            )?;
        }
        let (obsolete, level) = obsolete;
        if let Some(marker) = obsolete.filter(|m| self.profile.is_at_least(m.version)) {
            report.add(
                level,
                element.line(),
                format!(
                    "{} {} has been obsolete since version {}: {}",
                    element, subject, marker.version, marker.message
                ),
            )?;
        }
        Ok(())
    }
}

/// A category of checks.
pub trait Check: Send + Sync {
    /// Category this check implements.
    fn kind(&self) -> CheckKind;

    /// Human-readable name of the check.
    fn name(&self) -> &str;

    /// Description of what this check verifies.
    fn description(&self) -> &str;

    /// Check the document, appending findings to `report`.
    fn run(&self, ctx: &CheckContext<'_>, report: &mut Report) -> Result<(), Abort>;
}

/// Ordered collection of checks.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with every built-in check in run order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AttributesCheck));
        registry.register(Box::new(ClassesCheck));
        registry.register(Box::new(MetadataCheck));
        registry.register(Box::new(PropertiesCheck));
        registry
    }

    /// Append a check; checks run in registration order.
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    pub fn get(&self, kind: CheckKind) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| c.kind() == kind)
            .map(|c| c.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::document::ParseMode;

    /// Run a single check over `html` with `profile`.
    pub fn run_check(check: &dyn Check, html: &str, profile: &Profile) -> Report {
        let document = Document::parse(html, ParseMode::Strict).unwrap();
        let index = DocumentIndex::build(&document);
        let ctx = CheckContext::new(&index, profile);
        let mut report = Report::new("test.hocr");
        check.run(&ctx, &mut report).unwrap();
        report
    }

    pub fn messages(report: &Report, level: Level) -> Vec<&str> {
        report
            .items()
            .iter()
            .filter(|i| i.level == level)
            .map(|i| i.message.as_str())
            .collect()
    }
}
