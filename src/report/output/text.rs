//! Line-oriented text formatter.
//!
//! One line per item, `[LEVEL] filename[:line] message`. Valid documents get
//! a closing `[OK] filename Document is valid` line.

use super::ReportFormatter;
use crate::report::{Level, Report};
use console::Style;
use std::io::Write;

/// Formats reports as text, optionally with ANSI-colored levels.
pub struct TextFormatter {
    /// Whether to wrap levels in ANSI escape codes.
    pub use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn level_style(level: Level) -> Style {
        let style = Style::new().force_styling(true);
        match level {
            Level::Ok => style.green(),
            Level::Debug => style.blue(),
            Level::Warn => style.yellow(),
            Level::Error => style.red(),
            Level::Fatal => style.red().bold(),
        }
    }

    fn write_line<W: Write>(
        &self,
        writer: &mut W,
        filename: &str,
        level: Level,
        line: usize,
        message: &str,
    ) -> std::io::Result<()> {
        let level = if self.use_color {
            Self::level_style(level).apply_to(level).to_string()
        } else {
            level.to_string()
        };
        if line > 0 {
            writeln!(writer, "[{}] {}:{} {}", level, filename, line, message)
        } else {
            writeln!(writer, "[{}] {} {}", level, filename, message)
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        for item in report.items() {
            self.write_line(
                writer,
                report.filename(),
                item.level,
                item.line,
                &item.message,
            )?;
        }
        if report.is_valid() {
            self.write_line(writer, report.filename(), Level::Ok, 0, "Document is valid")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &Report, use_color: bool) -> String {
        let mut output = Vec::new();
        TextFormatter::new(use_color)
            .format(report, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn valid_report_gets_ok_line() {
        let mut report = Report::new("page.hocr");
        report.warn(12, "Validation of <* class=\"ocr_glyph\"> not tested in-depth").unwrap();

        let output = render(&report, false);

        assert_eq!(
            output,
            "[WARN] page.hocr:12 Validation of <* class=\"ocr_glyph\"> not tested in-depth\n\
             [OK] page.hocr Document is valid\n"
        );
        // Formatting does not touch the report
        assert_eq!(report.items().len(), 1);
    }

    #[test]
    fn document_scoped_items_have_no_line() {
        let mut report = Report::new("page.hocr");
        report.error(0, "Required metadata field 'ocr-system' missing").unwrap();

        let output = render(&report, false);

        assert_eq!(
            output,
            "[ERROR] page.hocr Required metadata field 'ocr-system' missing\n"
        );
    }

    #[test]
    fn ansi_wraps_level_in_escape_codes() {
        let mut report = Report::new("page.hocr");
        report.error(3, "bad").unwrap();

        let output = render(&report, true);

        assert!(output.starts_with("[\u{1b}["));
        assert!(output.contains("ERROR"));
        assert!(output.contains("\u{1b}[0m] page.hocr:3 bad"));
    }
}
