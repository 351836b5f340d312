//! hOCR class definitions.
//!
//! An element's role is named by its `class` attribute. Each [`ClassSpec`]
//! lists the structural constraints for elements of that class.

use std::fmt;

use super::VersionMarker;

/// Definition of an element identified by its `class` value.
#[derive(Debug, Clone, Copy)]
pub struct ClassSpec {
    pub name: &'static str,
    /// Allowed tag names; empty allows any tag.
    pub tagnames: &'static [&'static str],
    /// Classes that must not appear among the element's descendants.
    pub must_not_contain: &'static [&'static str],
    /// Classes of which there must be exactly one ancestor.
    pub one_ancestor: &'static [&'static str],
    pub required_attributes: &'static [&'static str],
    pub required_properties: &'static [&'static str],
    /// Extra capabilities, on top of the class name itself.
    pub extra_capabilities: &'static [&'static str],
    /// At least one element of this class must be present in the document.
    pub must_exist: bool,
    pub deprecated: Option<VersionMarker>,
    pub obsolete: Option<VersionMarker>,
    /// Only a warning is emitted for elements of this class.
    pub not_checked: bool,
}

impl ClassSpec {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            tagnames: &[],
            must_not_contain: &[],
            one_ancestor: &[],
            required_attributes: &[],
            required_properties: &[],
            extra_capabilities: &[],
            must_exist: false,
            deprecated: None,
            obsolete: None,
            not_checked: false,
        }
    }

    const fn unchecked(mut self) -> Self {
        self.not_checked = true;
        self
    }

    const fn tags(mut self, tagnames: &'static [&'static str]) -> Self {
        self.tagnames = tagnames;
        self
    }

    const fn excludes(mut self, classes: &'static [&'static str]) -> Self {
        self.must_not_contain = classes;
        self
    }

    const fn within(mut self, classes: &'static [&'static str]) -> Self {
        self.one_ancestor = classes;
        self
    }

    const fn properties(mut self, properties: &'static [&'static str]) -> Self {
        self.required_properties = properties;
        self
    }

    const fn required(mut self) -> Self {
        self.must_exist = true;
        self
    }

    const fn obsolete_since(mut self, version: &'static str, message: &'static str) -> Self {
        self.obsolete = Some(VersionMarker { version, message });
        self
    }

    /// Capabilities a document needs to use this class. Always starts with
    /// the class name.
    pub fn required_capabilities(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.extra_capabilities.iter().copied())
    }
}

impl fmt::Display for ClassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<* class=\"{}\">", self.name)
    }
}

/// Float classes may not nest inside each other.
const FLOATS: &[&str] = &[
    "ocr_float",
    "ocr_textfloat",
    "ocr_textimage",
    "ocr_image",
    "ocr_linedrawing",
    "ocr_photo",
    "ocr_header",
    "ocr_footer",
    "ocr_pageno",
    "ocr_table",
];

const PAGE: &[&str] = &["ocr_page"];

/// All known classes, sorted by name. Checks run in this order.
pub static CLASSES: &[ClassSpec] = &[
    ClassSpec::new("ocr_abstract").unchecked(),
    ClassSpec::new("ocr_author").unchecked(),
    ClassSpec::new("ocr_blockquote").tags(&["blockquote"]),
    ClassSpec::new("ocr_caption").unchecked(),
    ClassSpec::new("ocr_carea").within(PAGE),
    ClassSpec::new("ocr_chapter").tags(&["h1"]),
    ClassSpec::new("ocr_chem").unchecked(),
    ClassSpec::new("ocr_cinfo").unchecked(),
    ClassSpec::new("ocr_column")
        .within(PAGE)
        .obsolete_since("1.1", "Please use ocr_carea instead of ocr_column"),
    ClassSpec::new("ocr_display").unchecked(),
    ClassSpec::new("ocr_document").unchecked(),
    ClassSpec::new("ocr_dropcap").unchecked(),
    ClassSpec::new("ocr_float").excludes(FLOATS),
    ClassSpec::new("ocr_footer").excludes(FLOATS),
    ClassSpec::new("ocr_glyph").unchecked(),
    ClassSpec::new("ocr_glyphs").unchecked(),
    ClassSpec::new("ocr_header").excludes(FLOATS),
    ClassSpec::new("ocr_image").excludes(FLOATS),
    ClassSpec::new("ocr_line")
        .excludes(&["ocr_line"])
        .within(PAGE)
        .properties(&["bbox"]),
    ClassSpec::new("ocr_linear").unchecked(),
    ClassSpec::new("ocr_linedrawing").excludes(FLOATS),
    ClassSpec::new("ocr_math").unchecked(),
    ClassSpec::new("ocr_noise").unchecked(),
    ClassSpec::new("ocr_page").required(),
    ClassSpec::new("ocr_pageno").excludes(FLOATS),
    ClassSpec::new("ocr_par").within(PAGE).tags(&["p"]),
    ClassSpec::new("ocr_part").tags(&["h1"]),
    ClassSpec::new("ocr_photo").excludes(FLOATS),
    ClassSpec::new("ocr_section").tags(&["h2"]),
    ClassSpec::new("ocr_separator").unchecked(),
    ClassSpec::new("ocr_subsection").tags(&["h3"]),
    ClassSpec::new("ocr_subsubsection").tags(&["h4"]),
    ClassSpec::new("ocr_table").excludes(FLOATS),
    ClassSpec::new("ocr_textfloat").excludes(FLOATS),
    ClassSpec::new("ocr_textimage").excludes(FLOATS),
    ClassSpec::new("ocr_title").unchecked(),
];

/// Look up a class by name.
pub fn class(name: &str) -> Option<&'static ClassSpec> {
    CLASSES.iter().find(|c| c.name == name)
}
