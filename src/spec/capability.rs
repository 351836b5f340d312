//! hOCR capabilities.
//!
//! A capability is an optional feature a document declares in its
//! `ocr-capabilities` metadata. Every class name is a capability as well, so
//! the set of names accepted wherever a capability is expected is wider than
//! [`CAPABILITIES`].

use super::class::CLASSES;

/// Capability that satisfies every capability requirement.
pub const WILDCARD: &str = "*";

/// A named optional hOCR feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Capability name as written in `ocr-capabilities`.
    pub name: &'static str,
    /// What enabling the capability allows.
    pub description: &'static str,
}

/// All capabilities that are not class names.
pub static CAPABILITIES: &[Capability] = &[
    Capability {
        name: "ocrp_lang",
        description: "'lang' attributes on hOCR elements",
    },
    Capability {
        name: "ocrp_dir",
        description: "'dir' attributes on hOCR elements",
    },
    Capability {
        name: "ocrp_poly",
        description: "'poly' title property",
    },
    Capability {
        name: "ocrp_font",
        description: "'x_font' and 'x_fsize' title properties",
    },
    Capability {
        name: "ocrp_nlp",
        description: "'nlp' title property",
    },
];

/// Look up a capability by name.
pub fn capability(name: &str) -> Option<&'static Capability> {
    CAPABILITIES.iter().find(|c| c.name == name)
}

/// Whether `name` may be used where a capability is expected: the wildcard,
/// a declared capability or a class name.
pub fn is_known_capability(name: &str) -> bool {
    name == WILDCARD || capability(name).is_some() || CLASSES.iter().any(|c| c.name == name)
}

/// All names accepted as implicit capabilities, wildcard first.
pub fn capability_names() -> Vec<&'static str> {
    std::iter::once(WILDCARD)
        .chain(CAPABILITIES.iter().map(|c| c.name))
        .chain(CLASSES.iter().map(|c| c.name))
        .collect()
}
