//! Report output formatters.
//!
//! This module provides formatters for writing a [`Report`] in different
//! formats (plain text, ANSI-colored text, XML, JSON and a bare validity
//! flag).

pub mod json;
pub mod text;
pub mod xml;

use crate::report::Report;
use std::io::Write;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Bool,
    Ansi,
    Xml,
    Json,
}

/// Trait for formatting a report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

/// Writes only whether the document is valid.
pub struct BoolFormatter;

impl ReportFormatter for BoolFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", report.is_valid())
    }
}

/// Format `report` in the requested format.
pub fn write_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new(false).format(report, writer),
        OutputFormat::Ansi => TextFormatter::new(true).format(report, writer),
        OutputFormat::Bool => BoolFormatter.format(report, writer),
        OutputFormat::Xml => XmlFormatter.format(report, writer),
        OutputFormat::Json => JsonFormatter::new().format(report, writer),
    }
}

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use xml::XmlFormatter;
