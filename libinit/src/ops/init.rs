//! Init operation - render a library skeleton and write it to disk.

use std::path::Path;

use libinit_core::Overwrite;
use libinit_library::{Generator, LibraryDescriptor, Result, TemplateSet};
use libinit_template::VariableSet;

use super::describe_source;
use crate::reports::{InitReport, InitResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the init operation.
pub struct InitOptions<'a> {
    /// Directory the skeleton is created in.
    pub output_dir: &'a Path,
    /// What to do with files that already exist.
    pub overwrite: Overwrite,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the init operation.
///
/// Every template is rendered before anything is written, so a failing
/// template leaves the output directory untouched.
pub fn init(
    library: &LibraryDescriptor,
    extra: &VariableSet,
    templates: &TemplateSet,
    opts: InitOptions,
) -> Result<InitReport> {
    let vars = library.variables(extra)?;
    let generation = Generator::new(templates).generate(&vars)?;

    let result = if opts.dry_run {
        let files = generation
            .files()
            .iter()
            .map(|f| PreviewFile {
                path: f.path.display().to_string(),
                content: f.content.clone(),
            })
            .collect();
        InitResult::Preview(PreviewResult { files })
    } else {
        let summary = generation.write(opts.output_dir, opts.overwrite)?;
        InitResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: summary
                .written
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            skipped: summary
                .skipped
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        })
    };

    Ok(InitReport {
        name: library.name().to_string(),
        version: library.version().to_string(),
        class_name: library.class_name()?,
        templates: describe_source(templates.source()),
        result,
    })
}
