//! Capability-gated HTML attributes on hOCR elements.

use super::{Check, CheckContext};
use crate::report::{Abort, Report};
use crate::spec::{CheckKind, ATTRIBUTES};

pub struct AttributesCheck;

impl Check for AttributesCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Attributes
    }

    fn name(&self) -> &str {
        "Attributes"
    }

    fn description(&self) -> &str {
        "Checks that lang and dir attributes are non-empty and declared as capabilities"
    }

    fn run(&self, ctx: &CheckContext<'_>, report: &mut Report) -> Result<(), Abort> {
        for spec in ATTRIBUTES {
            for &id in ctx.index.ocr_elements() {
                let element = ctx.index.element(id);
                let Some(value) = element.attr(spec.name) else {
                    continue;
                };
                if value.is_empty() {
                    report.error(
                        element.line(),
                        format!(
                            "{}: Attribute '{}' is empty. Either use 'unknown' or don't specify the attribute",
                            element, spec.name
                        ),
                    )?;
                }
                for capability in spec.required_capabilities {
                    ctx.require_capability(report, element, capability)?;
                }
            }
        }
        Ok(())
    }
}
