//! hocr-spec - Validate hOCR documents against the hOCR specification.
//!
//! hOCR embeds OCR layout and recognition results in HTML: element roles in
//! `class` attributes, geometry and confidences in `title` properties and
//! document-wide facts in `<meta>` fields. This crate checks documents
//! against the hOCR rules and reports every violation with its
//! source line.
//!
//! # Modules
//!
//! - [`spec`] - The hOCR tables and validation profiles
//! - [`title`] - Parser for `title` properties
//! - [`document`] - Document tree and per-run indexes
//! - [`checks`] - The four check categories
//! - [`validator`] - Runs checks and produces reports
//! - [`report`] - Findings and output formats
//! - [`config`] - Profile files
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use hocr_spec::document::ParseMode;
//! use hocr_spec::report::Level;
//! use hocr_spec::spec::Profile;
//! use hocr_spec::validator::Validator;
//!
//! let html = r#"<html><body>
//! <div class="ocr_page"><span class="ocr_line">text</span></div>
//! </body></html>"#;
//!
//! let validator = Validator::new(Profile::default());
//! let report = validator.validate_str(html, ParseMode::Lenient, "page.hocr").unwrap();
//!
//! assert!(!report.is_valid());
//! assert!(report
//!     .items()
//!     .iter()
//!     .any(|i| i.level == Level::Error && i.message.contains("missing attribute: 'title'")));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod report;
pub mod spec;
pub mod title;
pub mod validator;

pub use error::{HocrError, Result};
pub use report::{Level, Report, ReportItem};
pub use spec::{Profile, ProfileRegistry};
pub use validator::{Source, Validator};
