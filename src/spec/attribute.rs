//! HTML attributes with special meaning in hOCR.
//!
//! `title`, `class`, `name` and `content` are handled by the other checks;
//! this table only covers attributes gated by a capability.

/// An attribute that requires capabilities when used on hOCR elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub required_capabilities: &'static [&'static str],
}

/// Sorted by name.
pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec {
        name: "dir",
        required_capabilities: &["ocrp_dir"],
    },
    AttributeSpec {
        name: "lang",
        required_capabilities: &["ocrp_lang"],
    },
];

/// Look up an attribute by name.
pub fn attribute(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_requires_ocrp_lang() {
        assert_eq!(attribute("lang").unwrap().required_capabilities, &["ocrp_lang"]);
        assert!(attribute("title").is_none());
    }

    #[test]
    fn sorted_by_name() {
        let names: Vec<_> = ATTRIBUTES.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["dir", "lang"]);
    }
}
