//! Validate command implementation.
//!
//! The default command: validates every source and writes one report per
//! source. Exits with 0 only if every source is valid.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::config::load_profiles;
use crate::document::ParseMode;
use crate::error::{HocrError, Result};
use crate::report::output::{write_report, OutputFormat};
use crate::spec::{CheckKind, Profile, ProfileOverrides, ProfileRegistry};
use crate::validator::{Source, Validator};

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
#[derive(Debug, Clone)]
pub struct ValidateCommand {
    sources: Vec<Source>,
    format: OutputFormat,
    filename: Option<String>,
    profile: String,
    profiles: Option<PathBuf>,
    implicit_capabilities: Vec<String>,
    skip_check: Vec<CheckKind>,
    parse_strict: bool,
    silent: bool,
}

impl ValidateCommand {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            sources: cli.sources.iter().map(|s| Source::parse(s)).collect(),
            format: cli.format,
            filename: cli.filename.clone(),
            profile: cli.profile.clone(),
            profiles: cli.profiles.clone(),
            implicit_capabilities: cli.implicit_capabilities.clone(),
            skip_check: cli.skip_check.clone(),
            parse_strict: cli.parse_strict,
            silent: cli.silent,
        }
    }

    /// The named profile with the command-line overrides applied.
    fn resolve_profile(&self) -> Result<Profile> {
        let registry = match &self.profiles {
            Some(path) => load_profiles(path)?,
            None => ProfileRegistry::builtin(),
        };
        let base = registry
            .get(&self.profile)
            .ok_or_else(|| HocrError::UnknownProfile {
                name: self.profile.clone(),
            })?;
        Ok(base.with_overrides(&ProfileOverrides {
            version: None,
            implicit_capabilities: self.implicit_capabilities.clone(),
            skip_check: self.skip_check.clone(),
        }))
    }

    fn parse_mode(&self) -> ParseMode {
        if self.parse_strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let profile = self.resolve_profile()?;
        tracing::debug!(
            profile = %self.profile,
            version = profile.version(),
            checks = ?profile.enabled_checks(),
            "Resolved profile"
        );
        let validator = Validator::new(profile);
        let mode = self.parse_mode();

        let mut all_valid = true;
        for source in &self.sources {
            let report = validator.validate_source(source, mode, self.filename.as_deref())?;
            all_valid &= report.is_valid();
            if !self.silent {
                let mut buffer = Vec::new();
                write_report(&report, self.format, &mut buffer)?;
                out.write_all(&buffer)?;
            }
        }
        out.flush()?;

        if all_valid {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    const VALID: &str = r#"<html>
<head>
<meta name="ocr-system" content="tesseract 3.03"/>
<meta name="ocr-capabilities" content="ocr_page ocr_line"/>
<meta name="ocr-number-of-pages" content="1"/>
<meta name="ocr-langs" content="en"/>
<meta name="ocr-scripts" content="Latn"/>
</head>
<body>
<div class="ocr_page" title="bbox 0 0 100 100">
<span class="ocr_line" title="bbox 0 0 10 10">line</span>
</div>
</body>
</html>"#;

    fn run(args: &[&str]) -> (Result<CommandResult>, String) {
        let cli = Cli::try_parse_from(std::iter::once("hocr-spec").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = ValidateCommand::from_cli(&cli).execute(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn write(temp: &TempDir, name: &str, content: &str) -> String {
        let path = temp.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.display().to_string()
    }

    #[test]
    fn valid_document() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "page.hocr", VALID);

        let (result, out) = run(&["--filename", "page.hocr", &path]);

        assert_eq!(result.unwrap().exit_code, 0);
        assert_eq!(out, "[OK] page.hocr Document is valid\n");
    }

    #[test]
    fn invalid_document_fails_and_silent_prints_nothing() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "empty.hocr", "<html><body></body></html>");

        let (result, out) = run(&["-s", &path]);

        assert_eq!(result.unwrap().exit_code, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn one_invalid_source_fails_all() {
        let temp = TempDir::new().unwrap();
        let good = write(&temp, "good.hocr", VALID);
        let bad = write(&temp, "bad.hocr", "<html></html>");

        let (result, out) = run(&["-f", "bool", &good, &bad]);

        assert_eq!(result.unwrap().exit_code, 1);
        assert_eq!(out, "true\nfalse\n");
    }

    #[test]
    fn overrides_apply_to_named_profile() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "bare.hocr", "<div class=\"ocr_page\"></div>");

        let (result, _) = run(&["-X", "metadata", "-C", "ocr_page", &path]);
        assert_eq!(result.unwrap().exit_code, 0);

        let (result, _) = run(&["-p", "relaxed", "-X", "metadata", &path]);
        assert_eq!(result.unwrap().exit_code, 0);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "page.hocr", VALID);
        let (result, _) = run(&["-p", "nope", &path]);
        assert!(matches!(result, Err(HocrError::UnknownProfile { .. })));
    }

    #[test]
    fn profile_from_file() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "bare.hocr", "<div class=\"ocr_page\"></div>");
        let profiles = write(
            &temp,
            "profiles.yml",
            "profiles:\n  lax:\n    implicit_capabilities: ['*']\n    skip_check: [metadata]\n",
        );

        let (result, _) = run(&["--profiles", &profiles, "-p", "lax", &path]);
        assert_eq!(result.unwrap().exit_code, 0);
    }
}
