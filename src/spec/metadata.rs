//! Document-level `<meta name="ocr-…">` fields.

/// Definition of an hOCR metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataField {
    pub name: &'static str,
    /// Missing field is an error.
    pub required: bool,
    /// Missing field is a warning.
    pub recommended: bool,
    /// Content values known to the validator; anything else gets a debug
    /// note. Empty means no such note is produced.
    pub known: &'static [&'static str],
}

impl MetadataField {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            recommended: false,
            known: &[],
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    const fn known(mut self, values: &'static [&'static str]) -> Self {
        self.known = values;
        self
    }
}

/// Name of the field that lists declared capabilities.
pub const CAPABILITIES_FIELD: &str = "ocr-capabilities";

/// Sorted by name.
pub static METADATA_FIELDS: &[MetadataField] = &[
    MetadataField::new(CAPABILITIES_FIELD).required(),
    MetadataField::new("ocr-langs").recommended(),
    MetadataField::new("ocr-number-of-pages").recommended(),
    MetadataField::new("ocr-scripts").recommended(),
    MetadataField::new("ocr-system")
        .required()
        .known(&["tesseract 3.03", "OCRopus Revision: 312"]),
];

/// Look up a metadata field by name.
pub fn metadata_field(name: &str) -> Option<&'static MetadataField> {
    METADATA_FIELDS.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_and_capabilities_are_required() {
        assert!(metadata_field("ocr-system").unwrap().required);
        assert!(metadata_field(CAPABILITIES_FIELD).unwrap().required);
        assert!(metadata_field("ocr-langs").unwrap().recommended);
    }

    #[test]
    fn only_system_has_known_values() {
        let with_known: Vec<_> = METADATA_FIELDS
            .iter()
            .filter(|m| !m.known.is_empty())
            .map(|m| m.name)
            .collect();
        assert_eq!(with_known, vec!["ocr-system"]);
    }

    #[test]
    fn sorted_by_name() {
        assert!(METADATA_FIELDS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(metadata_field("ocr_system").is_none());
    }
}
