//! Library integration tests.

use hocr_spec::HocrError;

#[test]
fn error_types_are_public() {
    let err = HocrError::UnknownProfile {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> hocr_spec::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use hocr_spec::cli::Cli;
    use hocr_spec::report::output::OutputFormat;
    use clap::Parser;

    let cli = Cli::parse_from(["hocr-spec", "--format", "json", "a.hocr", "b.hocr"]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.sources.len(), 2);
}

#[test]
fn spec_tables_are_public() {
    use hocr_spec::spec::{list, Category, ProfileRegistry};

    let profiles = ProfileRegistry::builtin();
    assert!(profiles.get("standard").is_some());
    assert!(profiles.get("relaxed").unwrap().grants_all());
    assert!(list(Category::Classes).contains(&"ocr_page".to_string()));
}
