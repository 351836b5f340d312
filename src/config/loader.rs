//! Profile file loading.

use crate::config::schema::ProfileConfig;
use crate::error::{HocrError, Result};
use crate::spec::{is_known_capability, ProfileRegistry};
use std::fs;
use std::path::Path;

/// Load a profile file and parse it into a [`ProfileConfig`].
///
/// # Errors
///
/// Returns `ProfileConfigNotFound` if the file doesn't exist.
/// Returns `ProfileConfigParse` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProfileConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HocrError::ProfileConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HocrError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ProfileConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProfileConfig> {
    // An empty file is an empty config
    if content.trim().is_empty() {
        return Ok(ProfileConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| HocrError::ProfileConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Built-in profiles plus those in `path`, which replace built-ins of the
/// same name.
///
/// # Errors
///
/// Besides loading errors, returns `UnknownCapability` if a profile grants a
/// capability that does not exist.
pub fn load_profiles(path: &Path) -> Result<ProfileRegistry> {
    let config = load_config_file(path)?;
    let mut registry = ProfileRegistry::builtin();

    for (name, entry) in &config.profiles {
        if let Some(unknown) = entry
            .implicit_capabilities
            .iter()
            .find(|c| !is_known_capability(c))
        {
            return Err(HocrError::UnknownCapability {
                name: unknown.clone(),
            });
        }
        tracing::debug!(profile = %name, path = %path.display(), "Loaded profile");
        registry.register(name.clone(), entry.to_profile());
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::CheckKind;
    use tempfile::TempDir;

    fn write(temp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp.path().join("profiles.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn file_profiles_extend_builtins() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "profiles:\n  legacy:\n    version: '1.0'\n");

        let registry = load_profiles(&path).unwrap();

        assert_eq!(registry.names(), vec!["standard", "relaxed", "legacy"]);
        assert_eq!(registry.get("legacy").unwrap().version(), "1.0");
    }

    #[test]
    fn file_profiles_shadow_builtins() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "profiles:\n  relaxed:\n    skip_check: [metadata]\n");

        let registry = load_profiles(&path).unwrap();
        let relaxed = registry.get("relaxed").unwrap();

        assert_eq!(registry.len(), 2);
        assert!(relaxed.skips(CheckKind::Metadata));
        assert!(!relaxed.skips(CheckKind::Attributes));
        assert!(!relaxed.grants_all());
    }

    #[test]
    fn empty_file_is_builtins() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "");
        assert_eq!(load_profiles(&path).unwrap().len(), 2);
    }

    #[test]
    fn missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_profiles(&temp.path().join("nope.yml"));
        assert!(matches!(result, Err(HocrError::ProfileConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "profiles: [oops");
        let result = load_profiles(&path);
        assert!(matches!(result, Err(HocrError::ProfileConfigParse { .. })));
    }

    #[test]
    fn unknown_capability() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "profiles:\n  x:\n    implicit_capabilities: [ocrp_telepathy]\n");
        let result = load_profiles(&path);
        assert!(matches!(
            result,
            Err(HocrError::UnknownCapability { ref name }) if name == "ocrp_telepathy"
        ));
    }
}
