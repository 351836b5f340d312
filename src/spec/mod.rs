//! The hOCR specification as data.
//!
//! Each entity family is a static table built at compile time and looked up
//! by name:
//!
//! - [`capability`] - Optional features a document can declare
//! - [`property`] - `title` properties and their value constraints
//! - [`class`] - Structural constraints per `class` value
//! - [`attribute`] - Capability-gated HTML attributes
//! - [`metadata`] - `<meta name="ocr-…">` fields
//! - [`check`] - Check categories
//! - [`profile`] - Validation profiles
//!
//! # Example
//!
//! ```
//! use hocr_spec::spec::{class, property, ValueKind};
//!
//! let line = class("ocr_line").unwrap();
//! assert_eq!(line.required_properties, &["bbox"]);
//!
//! let bbox = property("bbox").unwrap();
//! assert_eq!(bbox.kind, ValueKind::Integer);
//! assert!(bbox.is_list());
//! ```

pub mod attribute;
pub mod capability;
pub mod check;
pub mod class;
pub mod metadata;
pub mod profile;
pub mod property;

pub use attribute::{attribute, AttributeSpec, ATTRIBUTES};
pub use capability::{
    capability, capability_names, is_known_capability, Capability, CAPABILITIES, WILDCARD,
};
pub use check::CheckKind;
pub use class::{class, ClassSpec, CLASSES};
pub use metadata::{metadata_field, MetadataField, CAPABILITIES_FIELD, METADATA_FIELDS};
pub use profile::{Profile, ProfileOverrides, ProfileRegistry, DEFAULT_PROFILE, DEFAULT_VERSION};
pub use property::{property, PropertySpec, Range, Shape, ValueKind, PROPERTIES};

/// A version at which a class or property was deprecated or made obsolete,
/// with a hint for the author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMarker {
    pub version: &'static str,
    pub message: &'static str,
}

/// Enumerable parts of the hOCR tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    Profiles,
    Capabilities,
    Classes,
    Checks,
}

/// Names in `category`. Profiles are the built-in ones.
pub fn list(category: Category) -> Vec<String> {
    match category {
        Category::Profiles => ProfileRegistry::builtin()
            .names()
            .into_iter()
            .map(String::from)
            .collect(),
        Category::Capabilities => CAPABILITIES.iter().map(|c| c.name.to_string()).collect(),
        Category::Classes => CLASSES.iter().map(|c| c.name.to_string()).collect(),
        Category::Checks => CheckKind::ALL.iter().map(|k| k.to_string()).collect(),
    }
}
