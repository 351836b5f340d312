//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::PossibleValuesParser;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::output::OutputFormat;
use crate::spec::{capability_names, Category, CheckKind, DEFAULT_PROFILE};

/// Validate hOCR documents against the hOCR specification.
#[derive(Debug, Parser)]
#[command(name = "hocr-spec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// hOCR files to validate, `-` for standard input
    #[arg(
        value_name = "SOURCES",
        required_unless_present_any = ["list", "completions"]
    )]
    pub sources: Vec<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Filename to use in the report instead of the source path
    #[arg(long)]
    pub filename: Option<String>,

    /// Validation profile
    #[arg(short, long, default_value = DEFAULT_PROFILE, env = "HOCR_SPEC_PROFILE")]
    pub profile: String,

    /// Grant a capability without declaring it in the document (`*` for all)
    #[arg(
        short = 'C',
        long = "implicit-capabilities",
        value_name = "CAPABILITY",
        value_parser = PossibleValuesParser::new(capability_names())
    )]
    pub implicit_capabilities: Vec<String>,

    /// Skip a check category
    #[arg(short = 'X', long = "skip-check", value_enum, value_name = "CHECK")]
    pub skip_check: Vec<CheckKind>,

    /// Reject markup that does not nest properly instead of recovering
    #[arg(long)]
    pub parse_strict: bool,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    pub silent: bool,

    /// YAML file with additional profiles
    #[arg(long, value_name = "FILE", env = "HOCR_SPEC_PROFILES")]
    pub profiles: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// List profiles, capabilities, classes or checks and exit
    #[arg(long, value_enum, value_name = "CATEGORY", conflicts_with = "completions")]
    pub list: Option<Category>,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
