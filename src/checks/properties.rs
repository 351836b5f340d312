//! Value checks for `title` properties.

use super::{Check, CheckContext};
use crate::document::Element;
use crate::report::{Abort, Level, Report};
use crate::spec::{property, CheckKind, PropertySpec, Range};
use crate::title::{parse_title, Properties, PropertyValue, Scalar};

/// Parses the title of every hOCR element and checks each property.
pub struct PropertiesCheck;

impl Check for PropertiesCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Properties
    }

    fn name(&self) -> &str {
        "Properties"
    }

    fn description(&self) -> &str {
        "Checks title properties for capabilities, co-properties and value ranges"
    }

    fn run(&self, ctx: &CheckContext<'_>, report: &mut Report) -> Result<(), Abort> {
        for &id in ctx.index.ocr_elements() {
            let element = ctx.index.element(id);
            let Some(title) = element.attr("title") else {
                continue;
            };
            let properties = match parse_title(title) {
                Ok(properties) => properties,
                Err(err) => {
                    report.error(
                        element.line(),
                        format!(
                            "Error parsing properties for \"{}\" : (property {})",
                            element, err
                        ),
                    )?;
                    continue;
                }
            };
            for (name, value) in properties.iter() {
                // Parsing only yields declared properties
                if let Some(spec) = property(name) {
                    check_property(ctx, report, element, spec, value, &properties)?;
                }
            }
        }
        Ok(())
    }
}

fn check_property(
    ctx: &CheckContext<'_>,
    report: &mut Report,
    element: &Element,
    spec: &PropertySpec,
    value: &PropertyValue,
    properties: &Properties,
) -> Result<(), Abort> {
    let line = element.line();

    for capability in spec.required_capabilities {
        ctx.require_capability(report, element, capability)?;
    }

    ctx.check_version(
        report,
        element,
        spec,
        spec.deprecated,
        (spec.obsolete, Level::Warn),
    )?;

    for &required in spec.required_properties {
        if !properties.contains(required) {
            report.error(
                line,
                format!(
                    "{} Property '{}' requires property '{}' in the same title",
                    element, spec.name, required
                ),
            )?;
        }
    }

    let Some(range) = spec.range else {
        return Ok(());
    };
    let subject = format!("<{} title=\"{}\">", element.tag(), spec.name);

    match value {
        PropertyValue::Scalar(v) => {
            if !in_range(report, line, &subject, v, range)? {
                report.error(
                    line,
                    format!("{} : Value out of range: {} not in {}", subject, v, range),
                )?;
            }
        }
        PropertyValue::List(values) => {
            for (i, v) in values.iter().enumerate() {
                if !in_range(report, line, &subject, v, range)? {
                    report.error(
                        line,
                        format!(
                            "{} : List value [{}] out of range ({} not in {})",
                            subject, i, v, range
                        ),
                    )?;
                }
            }
        }
        PropertyValue::Grid(groups) => {
            for (i, group) in groups.iter().enumerate() {
                for (j, v) in group.iter().enumerate() {
                    if !in_range(report, line, &subject, v, range)? {
                        report.error(
                            line,
                            format!(
                                "{} : List value [{}][{}] out of range ({} not in {})",
                                subject, i, j, v, range
                            ),
                        )?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// A range on a string value means the property table is inconsistent.
fn in_range(
    report: &mut Report,
    line: usize,
    subject: &str,
    value: &Scalar,
    range: Range,
) -> Result<bool, Abort> {
    match value.as_f64() {
        Some(v) => Ok(range.contains(v)),
        None => {
            report.fatal(
                line,
                format!(
                    "{} : Range {} declared on non-numeric value '{}'",
                    subject, range, value
                ),
            )?;
            Ok(true)
        }
    }
}
