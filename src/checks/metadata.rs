//! Document metadata (`<meta name="ocr-…">`).

use super::{Check, CheckContext};
use crate::document::Element;
use crate::report::{Abort, Report};
use crate::spec::{metadata_field, CheckKind, METADATA_FIELDS};

pub struct MetadataCheck;

impl Check for MetadataCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Metadata
    }

    fn name(&self) -> &str {
        "Metadata"
    }

    fn description(&self) -> &str {
        "Checks that required metadata fields are present once and no unknown fields are used"
    }

    fn run(&self, ctx: &CheckContext<'_>, report: &mut Report) -> Result<(), Abort> {
        let metas: Vec<(&str, &Element)> = ctx
            .index
            .with_tag("meta")
            .iter()
            .map(|&id| ctx.index.element(id))
            .filter_map(|el| el.attr("name").map(|name| (name, el)))
            .collect();

        for &(name, element) in &metas {
            if name.starts_with("ocr") && metadata_field(name).is_none() {
                report.error(
                    element.line(),
                    format!("{} Unknown metadata field '{}'", element, name),
                )?;
            }
        }

        for field in METADATA_FIELDS {
            let instances: Vec<&Element> = metas
                .iter()
                .filter(|(name, _)| *name == field.name)
                .map(|&(_, el)| el)
                .collect();

            let element = match instances.as_slice() {
                [] => {
                    if field.required {
                        report.error(
                            0,
                            format!("Required metadata field '{}' missing", field.name),
                        )?;
                    } else if field.recommended {
                        report.warn(
                            0,
                            format!("Recommended metadata field '{}' missing", field.name),
                        )?;
                    }
                    continue;
                }
                [first] => *first,
                [first, second, ..] => {
                    report.error(second.line(), "Metadata fields must not be repeated")?;
                    *first
                }
            };

            let Some(content) = element.attr("content") else {
                report.error(
                    element.line(),
                    format!("{} must have 'content' attribute", element),
                )?;
                continue;
            };
            if !field.known.is_empty() && !field.known.contains(&content) {
                report.debug(
                    element.line(),
                    format!(
                        "Unknown {}: '{}'. Consider opening an issue to let others know about it.",
                        field.name, content
                    ),
                )?;
            }
        }
        Ok(())
    }
}
