//! Validation profiles.
//!
//! A [`Profile`] restricts how documents are checked: which version the
//! document is held to, which capabilities are granted without being
//! declared, and which check categories are skipped. Profiles are values;
//! overriding one produces a new profile and leaves the registered one alone.

use super::capability::WILDCARD;
use super::check::CheckKind;

/// Version checked against when none is given.
pub const DEFAULT_VERSION: &str = "1.1";

/// Name of the profile used when none is requested.
pub const DEFAULT_PROFILE: &str = "standard";

/// An immutable validation profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    version: String,
    description: Option<String>,
    implicit_capabilities: Vec<String>,
    skip_check: Vec<CheckKind>,
}

/// Replacement values for a profile. Empty fields keep the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOverrides {
    pub version: Option<String>,
    pub implicit_capabilities: Vec<String>,
    pub skip_check: Vec<CheckKind>,
}

impl Profile {
    /// Create a profile checking against `version`, with no implicit
    /// capabilities and no skipped checks.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            description: None,
            implicit_capabilities: Vec::new(),
            skip_check: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_implicit_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implicit_capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skip_check(mut self, checks: impl IntoIterator<Item = CheckKind>) -> Self {
        self.skip_check = checks.into_iter().collect();
        self
    }

    /// Derive a new profile, replacing every non-empty override.
    pub fn with_overrides(&self, overrides: &ProfileOverrides) -> Self {
        let mut profile = self.clone();
        if let Some(version) = &overrides.version {
            profile.version = version.clone();
        }
        if !overrides.implicit_capabilities.is_empty() {
            profile.implicit_capabilities = overrides.implicit_capabilities.clone();
        }
        if !overrides.skip_check.is_empty() {
            profile.skip_check = overrides.skip_check.clone();
        }
        profile
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn implicit_capabilities(&self) -> &[String] {
        &self.implicit_capabilities
    }

    pub fn skip_check(&self) -> &[CheckKind] {
        &self.skip_check
    }

    /// Whether the wildcard capability is granted.
    pub fn grants_all(&self) -> bool {
        self.implicit_capabilities.iter().any(|c| c == WILDCARD)
    }

    /// Whether `capability` is granted implicitly.
    pub fn grants(&self, capability: &str) -> bool {
        self.grants_all() || self.implicit_capabilities.iter().any(|c| c == capability)
    }

    pub fn skips(&self, check: CheckKind) -> bool {
        self.skip_check.contains(&check)
    }

    /// Checks that run under this profile, in run order.
    pub fn enabled_checks(&self) -> Vec<CheckKind> {
        CheckKind::ALL
            .into_iter()
            .filter(|kind| !self.skips(*kind))
            .collect()
    }

    /// Whether the profile's version has reached `version`.
    ///
    /// Versions compare as plain strings, so this only orders correctly
    /// while every component is a single digit.
    pub fn is_at_least(&self, version: &str) -> bool {
        self.version.as_str() >= version
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION)
    }
}

/// Named profiles, in registration order.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<(String, Profile)>,
}

impl ProfileRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    /// Create a registry with the built-in profiles.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "standard",
            Profile::default().with_description("Full validation of current spec [Default]"),
        );
        registry.register(
            "relaxed",
            Profile::default()
                .with_description("Validation without any capability and attribute checks")
                .with_implicit_capabilities([WILDCARD])
                .with_skip_check([CheckKind::Attributes]),
        );
        registry
    }

    /// Register a profile, replacing any profile of the same name in place.
    pub fn register(&mut self, name: impl Into<String>, profile: Profile) {
        let name = name.into();
        match self.profiles.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = profile,
            None => self.profiles.push((name, profile)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, profile)| profile)
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.profiles.iter().map(|(n, p)| (n.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
