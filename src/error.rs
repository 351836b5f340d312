//! Error types for hocr-spec operations.
//!
//! This module defines [`HocrError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! Validation findings are never errors: they are recorded in a
//! [`Report`](crate::report::Report). `HocrError` covers the failures that
//! stop a document from being validated at all (unreadable sources,
//! unparseable markup, bad profile configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hocr-spec operations.
#[derive(Debug, Error)]
pub enum HocrError {
    /// Requested validation profile is not registered.
    #[error("Unknown profile: {name}")]
    UnknownProfile { name: String },

    /// Requested check category does not exist.
    #[error("Unknown check: {name}")]
    UnknownCheck { name: String },

    /// Capability name is neither a capability, a class nor the wildcard.
    #[error("Unknown capability: {name}")]
    UnknownCapability { name: String },

    /// Profile file not found at the given location.
    #[error("Profile file not found: {path}")]
    ProfileConfigNotFound { path: PathBuf },

    /// Failed to parse a profile file.
    #[error("Failed to parse profiles at {path}: {message}")]
    ProfileConfigParse { path: PathBuf, message: String },

    /// The document markup could not be turned into a tree.
    #[error("Failed to parse {name} at line {line}: {message}")]
    DocumentParse {
        name: String,
        line: usize,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An error with context attached, e.g. which source failed to read.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hocr-spec operations.
pub type Result<T> = std::result::Result<T, HocrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_displays_name() {
        let err = HocrError::UnknownProfile {
            name: "paranoid".into(),
        };
        assert!(err.to_string().contains("paranoid"));
    }

    #[test]
    fn unknown_capability_displays_name() {
        let err = HocrError::UnknownCapability {
            name: "ocrp_teleport".into(),
        };
        assert_eq!(err.to_string(), "Unknown capability: ocrp_teleport");
    }

    #[test]
    fn profile_parse_error_displays_path_and_message() {
        let err = HocrError::ProfileConfigParse {
            path: PathBuf::from("/profiles.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/profiles.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn document_parse_error_displays_location() {
        let err = HocrError::DocumentParse {
            name: "page.hocr".into(),
            line: 12,
            message: "unexpected end tag </div>".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("page.hocr"));
        assert!(msg.contains("line 12"));
        assert!(msg.contains("</div>"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HocrError = io_err.into();
        assert!(matches!(err, HocrError::Io(_)));
    }

    #[test]
    fn context_errors_display_outermost_context() {
        let err: HocrError = anyhow::anyhow!("permission denied")
            .context("Failed to read page.hocr")
            .into();
        assert!(matches!(err, HocrError::Other(_)));
        assert_eq!(err.to_string(), "Failed to read page.hocr");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(HocrError::UnknownCheck {
                name: "spelling".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
