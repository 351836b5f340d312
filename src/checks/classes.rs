//! Structural checks per hOCR class.

use super::{Check, CheckContext};
use crate::document::{Element, ElementId};
use crate::report::{Abort, Level, Report};
use crate::spec::{CheckKind, ClassSpec, CLASSES};
use crate::title::parse_title;

/// Checks every element against the definition of its class.
pub struct ClassesCheck;

impl Check for ClassesCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Classes
    }

    fn name(&self) -> &str {
        "Classes"
    }

    fn description(&self) -> &str {
        "Checks tag names, nesting, required attributes and properties of hOCR elements"
    }

    fn run(&self, ctx: &CheckContext<'_>, report: &mut Report) -> Result<(), Abort> {
        for spec in CLASSES {
            let elements = ctx.index.with_class(spec.name);
            tracing::trace!(class = spec.name, count = elements.len(), "Checking class");
            if spec.must_exist && elements.is_empty() {
                report.error(0, format!("At least one {} must exist", spec))?;
            }
            for &id in elements {
                check_element(ctx, report, id, spec)?;
            }
        }
        Ok(())
    }
}

fn check_element(
    ctx: &CheckContext<'_>,
    report: &mut Report,
    id: ElementId,
    spec: &ClassSpec,
) -> Result<(), Abort> {
    let element = ctx.index.element(id);
    let line = element.line();

    if spec.not_checked {
        return report.warn(line, format!("Validation of {} not tested in-depth", spec));
    }

    ctx.check_version(
        report,
        element,
        spec,
        spec.deprecated,
        (spec.obsolete, Level::Error),
    )?;

    if !spec.tagnames.is_empty() && !spec.tagnames.contains(&element.tag()) {
        report.error(
            line,
            format!(
                "{} must have a tag name from {:?}, not '{}'",
                element,
                spec.tagnames,
                element.tag()
            ),
        )?;
    }

    for &forbidden in spec.must_not_contain {
        if let Some(inner) = ctx.index.first_descendant_with_class(id, forbidden) {
            let inner = ctx.index.element(inner);
            report.error(
                line,
                format!(
                    "{} must not contain '{}', but does contain {} in line {}",
                    element,
                    forbidden,
                    inner,
                    inner.line()
                ),
            )?;
        }
    }

    for &ancestor in spec.one_ancestor {
        let found = ctx.index.count_ancestors_with_class(id, ancestor);
        if found != 1 {
            report.error(
                line,
                format!(
                    "{} must be descendant of exactly one '{}', but found {}",
                    element, ancestor, found
                ),
            )?;
        }
    }

    for &attribute in spec.required_attributes {
        if !element.has_attr(attribute) {
            report.error(
                line,
                format!("{} must have attribute '{}'", element, attribute),
            )?;
        }
    }

    check_required_properties(report, element, spec)?;

    for capability in spec.required_capabilities() {
        ctx.require_capability(report, element, capability)?;
    }
    Ok(())
}

/// Parse the title once; a missing or broken title is a single error.
fn check_required_properties(
    report: &mut Report,
    element: &Element,
    spec: &ClassSpec,
) -> Result<(), Abort> {
    if spec.required_properties.is_empty() {
        return Ok(());
    }
    let line = element.line();
    let Some(title) = element.attr("title") else {
        return report.error(
            line,
            format!(
                "{} Cannot parse properties, missing attribute: 'title'",
                element
            ),
        );
    };
    let properties = match parse_title(title) {
        Ok(properties) => properties,
        Err(err) => {
            return report.error(
                line,
                format!("Error parsing properties for \"{}\" : {}", element, err),
            )
        }
    };
    for &name in spec.required_properties {
        if !properties.contains(name) {
            report.error(
                line,
                format!("Element {} must have title prop '{}'", element, name),
            )?;
        }
    }
    Ok(())
}
