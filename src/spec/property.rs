//! Title property definitions.
//!
//! Properties live in the `title` attribute of hOCR elements as
//! `key value; key value`. Each [`PropertySpec`] says how the value is
//! converted and which constraints apply to it once parsed.

use std::fmt;

use super::VersionMarker;

/// Primitive type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Real,
    Text,
}

impl ValueKind {
    /// Whether a numeric range can be applied to values of this kind.
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Integer | ValueKind::Real)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "int"),
            ValueKind::Real => write!(f, "float"),
            ValueKind::Text => write!(f, "str"),
        }
    }
}

/// How a raw value is split before conversion.
///
/// Patterns are regular expressions, applied outer-then-inner for grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The whole value is one item.
    Scalar,
    /// Flat list split on one pattern.
    List(&'static str),
    /// List of lists: split on the outer pattern, then each group on the inner.
    Grid(&'static str, &'static str),
}

impl Shape {
    /// Split patterns in application order (empty for scalars).
    pub fn patterns(self) -> Vec<&'static str> {
        match self {
            Shape::Scalar => vec![],
            Shape::List(p) => vec![p],
            Shape::Grid(outer, inner) => vec![outer, inner],
        }
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Definition of a `title` property.
#[derive(Debug, Clone, Copy)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: ValueKind,
    pub shape: Shape,
    /// Only meaningful for numeric kinds.
    pub range: Option<Range>,
    /// Properties that must appear in the same title.
    pub required_properties: &'static [&'static str],
    pub required_capabilities: &'static [&'static str],
    pub deprecated: Option<VersionMarker>,
    pub obsolete: Option<VersionMarker>,
    /// Declared, but validation is intentionally shallow.
    pub not_checked: bool,
}

const WHITESPACE: &str = r"\s+";

impl PropertySpec {
    const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            shape: Shape::Scalar,
            range: None,
            required_properties: &[],
            required_capabilities: &[],
            deprecated: None,
            obsolete: None,
            not_checked: false,
        }
    }

    const fn list(mut self) -> Self {
        self.shape = Shape::List(WHITESPACE);
        self
    }

    const fn grid(mut self, outer: &'static str, inner: &'static str) -> Self {
        self.shape = Shape::Grid(outer, inner);
        self
    }

    const fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(Range { min, max });
        self
    }

    const fn requires(mut self, properties: &'static [&'static str]) -> Self {
        self.required_properties = properties;
        self
    }

    const fn capabilities(mut self, capabilities: &'static [&'static str]) -> Self {
        self.required_capabilities = capabilities;
        self
    }

    /// Whether values are lists (flat or nested).
    pub fn is_list(&self) -> bool {
        !matches!(self.shape, Shape::Scalar)
    }
}

impl fmt::Display for PropertySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<* title=\"{}\">", self.name)
    }
}

use ValueKind::{Integer, Real, Text};

/// All known title properties.
pub static PROPERTIES: &[PropertySpec] = &[
    // General properties
    PropertySpec::new("bbox", Integer).list(),
    PropertySpec::new("textangle", Real),
    PropertySpec::new("poly", Integer)
        .list()
        .capabilities(&["ocrp_poly"]),
    PropertySpec::new("order", Integer),
    PropertySpec::new("presence", Text),
    PropertySpec::new("cflow", Text),
    PropertySpec::new("baseline", Real).list(),
    // Recommended for typesetting elements
    PropertySpec::new("image", Text),
    PropertySpec::new("imagemd5", Text),
    PropertySpec::new("ppageno", Integer),
    PropertySpec::new("lpageno", Integer),
    // Optional for typesetting elements
    PropertySpec::new("scan_res", Integer).list(),
    PropertySpec::new("x_scanner", Text),
    PropertySpec::new("x_source", Text),
    PropertySpec::new("hardbreak", Integer),
    // Character information
    PropertySpec::new("cuts", Integer)
        .grid(WHITESPACE, ",")
        .requires(&["bbox"]),
    PropertySpec::new("nlp", Real)
        .list()
        .requires(&["bbox", "cuts"])
        .capabilities(&["ocrp_nlp"]),
    // Engine-specific markup
    PropertySpec::new("x_font", Text).capabilities(&["ocrp_font"]),
    PropertySpec::new("x_fsize", Integer).capabilities(&["ocrp_font"]),
    PropertySpec::new("x_bboxes", Integer).list(),
    PropertySpec::new("x_confs", Real).list().range(0.0, 100.0),
    PropertySpec::new("x_wconf", Real).range(0.0, 100.0),
];

/// Look up a property by name.
pub fn property(name: &str) -> Option<&'static PropertySpec> {
    PROPERTIES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_only_on_numeric_kinds() {
        for spec in PROPERTIES.iter().filter(|p| p.range.is_some()) {
            assert!(spec.kind.is_numeric(), "{} has a range", spec.name);
        }
    }

    #[test]
    fn co_properties_are_declared() {
        for spec in PROPERTIES {
            for required in spec.required_properties {
                assert!(property(required).is_some(), "{} -> {}", spec.name, required);
            }
        }
    }

    #[test]
    fn cuts_is_two_dimensional() {
        let cuts = property("cuts").unwrap();
        assert_eq!(cuts.shape.patterns(), vec![r"\s+", ","]);
        assert!(cuts.is_list());
    }

    #[test]
    fn scalar_has_no_patterns() {
        let wconf = property("x_wconf").unwrap();
        assert!(!wconf.is_list());
        assert!(wconf.shape.patterns().is_empty());
        assert!(wconf.range.unwrap().contains(100.0));
        assert!(!wconf.range.unwrap().contains(100.5));
    }

    #[test]
    fn font_properties_are_distinct() {
        assert_eq!(property("x_font").unwrap().kind, ValueKind::Text);
        assert_eq!(property("x_fsize").unwrap().kind, ValueKind::Integer);
    }

    #[test]
    fn display_uses_wildcard_tag() {
        assert_eq!(property("bbox").unwrap().to_string(), "<* title=\"bbox\">");
    }
}
