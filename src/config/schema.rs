//! Profile file schema.
//!
//! ```yaml
//! profiles:
//!   legacy:
//!     version: "1.0"
//!     description: Documents from before ocr_carea
//!     implicit_capabilities: [ocr_page, ocr_line]
//!     skip_check: [metadata]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::spec::{CheckKind, Profile, DEFAULT_VERSION};

/// Root of a profile file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Named profiles, sorted by name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, ProfileEntry>,
}

/// One profile as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileEntry {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implicit_capabilities: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skip_check: Vec<CheckKind>,
}

impl Default for ProfileEntry {
    fn default() -> Self {
        Self {
            version: default_version(),
            description: None,
            implicit_capabilities: Vec::new(),
            skip_check: Vec::new(),
        }
    }
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl ProfileEntry {
    pub fn to_profile(&self) -> Profile {
        let profile = Profile::new(self.version.clone())
            .with_implicit_capabilities(self.implicit_capabilities.iter().cloned())
            .with_skip_check(self.skip_check.iter().copied());
        match &self.description {
            Some(description) => profile.with_description(description.clone()),
            None => profile,
        }
    }
}
