//! Parsing of `title` attribute properties.
//!
//! A title is a `;`-separated list of segments, each made of a property name
//! and a value separated by the first whitespace run:
//!
//! ```text
//! bbox 10 10 90 20; baseline 0.015 -3; x_wconf 91
//! ```
//!
//! Values are converted according to the property's [`PropertySpec`]:
//! scalars as a whole, lists split on one pattern, grids split on two.
//!
//! # Example
//!
//! ```
//! use hocr_spec::title::{parse_title, PropertyValue, Scalar};
//!
//! let props = parse_title("bbox 1 2 3 4; x_wconf 91").unwrap();
//! assert_eq!(
//!     props.get("bbox"),
//!     Some(&PropertyValue::List(vec![
//!         Scalar::Int(1),
//!         Scalar::Int(2),
//!         Scalar::Int(3),
//!         Scalar::Int(4),
//!     ]))
//! );
//! assert!(props.contains("x_wconf"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::spec::{property, PropertySpec, Shape, ValueKind, PROPERTIES};

static SEGMENT_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*;\s*").unwrap());
static KEY_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Compiled split patterns of every registered property.
static SPLITTERS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    PROPERTIES
        .iter()
        .flat_map(|p| p.shape.patterns())
        .filter_map(|pattern| Regex::new(pattern).ok().map(|re| (pattern, re)))
        .collect()
});

fn splitter(pattern: &str) -> &'static Regex {
    SPLITTERS.get(pattern).unwrap_or_else(|| &*KEY_SEPARATOR)
}

/// Error produced while parsing a title.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    /// Segment without a value.
    #[error("malformed segment '{segment}': expected '<property> <value>'")]
    MalformedSegment { segment: String },

    /// Property name not declared in `PROPERTIES`.
    #[error("unknown property '{key}'")]
    UnknownProperty { key: String },

    /// A value token could not be converted to the declared kind.
    #[error("cannot convert '{raw}' to {kind} (property {key})")]
    ValueConversion {
        key: String,
        raw: String,
        kind: ValueKind,
    },
}

/// One converted value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Real(f64),
    Str(String),
}

impl Scalar {
    /// Numeric view of the value, `None` for strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Real(v) => Some(*v),
            Scalar::Str(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Real(v) => write!(f, "{}", v),
            Scalar::Str(v) => f.write_str(v),
        }
    }
}

/// A parsed property value, shaped like its spec.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
    Grid(Vec<Vec<Scalar>>),
}

/// Properties of one title, in first-appearance order.
///
/// A repeated key overwrites the earlier value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(&'static str, PropertyValue)>,
}

impl Properties {
    fn insert(&mut self, key: &'static str, value: PropertyValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Property names and values, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a `title` attribute into typed properties.
pub fn parse_title(title: &str) -> Result<Properties, TitleError> {
    let mut properties = Properties::default();
    for segment in SEGMENT_SEPARATOR.split(title.trim()) {
        let mut parts = KEY_SEPARATOR.splitn(segment, 2);
        let (key, raw) = match (parts.next(), parts.next()) {
            (Some(key), Some(raw)) => (key, raw),
            _ => {
                return Err(TitleError::MalformedSegment {
                    segment: segment.to_string(),
                })
            }
        };
        let spec = property(key).ok_or_else(|| TitleError::UnknownProperty {
            key: key.to_string(),
        })?;
        properties.insert(spec.name, convert(spec, raw)?);
    }
    Ok(properties)
}

fn convert(spec: &PropertySpec, raw: &str) -> Result<PropertyValue, TitleError> {
    let value = match spec.shape {
        Shape::Scalar => PropertyValue::Scalar(convert_scalar(spec, raw)?),
        Shape::List(pattern) => PropertyValue::List(
            splitter(pattern)
                .split(raw)
                .map(|token| convert_scalar(spec, token))
                .collect::<Result<_, _>>()?,
        ),
        Shape::Grid(outer, inner) => PropertyValue::Grid(
            splitter(outer)
                .split(raw)
                .map(|group| {
                    splitter(inner)
                        .split(group)
                        .map(|token| convert_scalar(spec, token))
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<_, _>>()?,
        ),
    };
    Ok(value)
}

fn convert_scalar(spec: &PropertySpec, raw: &str) -> Result<Scalar, TitleError> {
    let conversion_error = || TitleError::ValueConversion {
        key: spec.name.to_string(),
        raw: raw.to_string(),
        kind: spec.kind,
    };
    match spec.kind {
        ValueKind::Integer => raw
            .trim()
            .parse()
            .map(Scalar::Int)
            .map_err(|_| conversion_error()),
        ValueKind::Real => raw
            .trim()
            .parse()
            .map(Scalar::Real)
            .map_err(|_| conversion_error()),
        ValueKind::Text => Ok(Scalar::Str(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::Int).collect()
    }

    #[test]
    fn parses_list_property() {
        let props = parse_title("bbox 1 2 3 4").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(
            props.get("bbox"),
            Some(&PropertyValue::List(ints(&[1, 2, 3, 4])))
        );
    }

    #[test]
    fn parses_multiple_segments() {
        let props = parse_title("bbox 0 0 10 10 ;  x_wconf 87.5;textangle 90").unwrap();
        let keys: Vec<_> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["bbox", "x_wconf", "textangle"]);
        assert_eq!(
            props.get("x_wconf"),
            Some(&PropertyValue::Scalar(Scalar::Real(87.5)))
        );
    }

    #[test]
    fn string_value_keeps_inner_whitespace() {
        let props = parse_title("image \"scans/page 1.png\"").unwrap();
        assert_eq!(
            props.get("image"),
            Some(&PropertyValue::Scalar(Scalar::Str(
                "\"scans/page 1.png\"".to_string()
            )))
        );
    }

    #[test]
    fn parses_grid_property() {
        let props = parse_title("cuts 3 5,1 7,2,4").unwrap();
        assert_eq!(
            props.get("cuts"),
            Some(&PropertyValue::Grid(vec![
                ints(&[3]),
                ints(&[5, 1]),
                ints(&[7, 2, 4]),
            ]))
        );
    }

    #[test]
    fn duplicate_key_overwrites_in_place() {
        let props = parse_title("bbox 1 1 1 1; order 3; bbox 2 2 2 2").unwrap();
        let keys: Vec<_> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["bbox", "order"]);
        assert_eq!(
            props.get("bbox"),
            Some(&PropertyValue::List(ints(&[2, 2, 2, 2])))
        );
    }

    #[test]
    fn segment_without_value_is_malformed() {
        let err = parse_title("bbox").unwrap_err();
        assert_eq!(
            err,
            TitleError::MalformedSegment {
                segment: "bbox".into()
            }
        );
    }

    #[test]
    fn trailing_separator_is_malformed() {
        assert!(matches!(
            parse_title("bbox 1 2 3 4;"),
            Err(TitleError::MalformedSegment { .. })
        ));
    }

    #[test]
    fn unknown_property_carries_key() {
        let err = parse_title("bbox 1 2 3 4; x_color red").unwrap_err();
        assert_eq!(
            err,
            TitleError::UnknownProperty {
                key: "x_color".into()
            }
        );
    }

    #[test]
    fn conversion_error_carries_key_and_token() {
        let err = parse_title("bbox 1 2 three 4").unwrap_err();
        assert_eq!(
            err,
            TitleError::ValueConversion {
                key: "bbox".into(),
                raw: "three".into(),
                kind: ValueKind::Integer,
            }
        );
        assert!(err.to_string().contains("bbox"));
        assert!(err.to_string().contains("int"));
    }

    #[test]
    fn integer_property_rejects_reals() {
        assert!(matches!(
            parse_title("ppageno 1.5"),
            Err(TitleError::ValueConversion { .. })
        ));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let props = parse_title("  x_wconf 12  ").unwrap();
        assert_eq!(
            props.get("x_wconf"),
            Some(&PropertyValue::Scalar(Scalar::Real(12.0)))
        );
    }

    #[test]
    fn scalar_numeric_view() {
        assert_eq!(Scalar::Int(3).as_f64(), Some(3.0));
        assert_eq!(Scalar::Str("x".into()).as_f64(), None);
        assert_eq!(Scalar::Real(130.0).to_string(), "130");
    }
}
