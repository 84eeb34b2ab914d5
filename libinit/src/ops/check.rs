//! Check operation - template set validation.

use libinit_library::{Generator, Result, TemplateSet};

use super::describe_source;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parses every template and destination pattern and verifies that every
/// filter they use exists.
pub fn check(templates: &TemplateSet) -> Result<CheckReport> {
    let infos = Generator::new(templates).check()?;

    Ok(CheckReport {
        source: describe_source(templates.source()),
        templates: infos,
    })
}
