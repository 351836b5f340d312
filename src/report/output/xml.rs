//! XML output formatter.

use super::ReportFormatter;
use crate::report::Report;
use quick_xml::escape::escape;
use std::io::Write;

/// Formats reports as a `<report>` document.
pub struct XmlFormatter;

impl ReportFormatter for XmlFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "<report filename=\"{}\" valid=\"{}\">",
            escape(report.filename()),
            report.is_valid()
        )?;
        for item in report.items() {
            writeln!(writer, "\t<item>")?;
            writeln!(writer, "\t\t<level>{}</level>", item.level)?;
            writeln!(writer, "\t\t<sourceline>{}</sourceline>", item.line)?;
            writeln!(writer, "\t\t<message>{}</message>", escape(item.message.as_str()))?;
            writeln!(writer, "\t</item>")?;
        }
        writeln!(writer, "</report>")
    }
}
