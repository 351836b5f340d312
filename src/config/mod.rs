//! Profile configuration files.
//!
//! Besides the built-in profiles, named profiles can be loaded from a YAML
//! file passed with `--profiles`:
//! - Schema definitions in [`schema`]
//! - Loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use hocr_spec::config::load_profiles;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("profiles.yml");
//! fs::write(&path, "profiles:\n  legacy:\n    version: '1.0'\n").unwrap();
//!
//! let registry = load_profiles(&path).unwrap();
//! assert_eq!(registry.get("legacy").unwrap().version(), "1.0");
//! assert!(registry.get("standard").is_some());
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config_file, load_profiles, parse_config};
pub use schema::{ProfileConfig, ProfileEntry};
