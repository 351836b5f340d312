//! JSON output formatter.
//!
//! Formats reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::report::{Level, Report, ReportItem};
use serde::Serialize;
use std::io::Write;

/// Formats reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    filename: &'a str,
    valid: bool,
    items: &'a [ReportItem],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    fatal: usize,
    errors: usize,
    warnings: usize,
    debug: usize,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            filename: report.filename(),
            valid: report.is_valid(),
            items: report.items(),
            summary: JsonSummary {
                total: report.items().len(),
                fatal: report.count(Level::Fatal),
                errors: report.count(Level::Error),
                warnings: report.count(Level::Warn),
                debug: report.count(Level::Debug),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_valid_json() {
        let mut report = Report::new("page.hocr");
        report.error(4, "Error message").unwrap();
        report.warn(0, "Recommended metadata field 'ocr-langs' missing").unwrap();

        let mut output = Vec::new();
        JsonFormatter::new().format(&report, &mut output).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["filename"], "page.hocr");
        assert_eq!(parsed["valid"], false);
        assert_eq!(parsed["items"][0]["level"], "ERROR");
        assert_eq!(parsed["items"][0]["line"], 4);
        assert_eq!(parsed["items"][1]["level"], "WARN");
        assert_eq!(parsed["summary"]["errors"], 1);
        assert_eq!(parsed["summary"]["warnings"], 1);
        assert_eq!(parsed["summary"]["total"], 2);
    }
}
