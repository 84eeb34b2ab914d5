//! Rendering a template set and writing the result.

use std::path::{Component, Path, PathBuf};

use libinit_core::{File, Overwrite, WriteResult};
use libinit_template::{Renderer, VariableSet};

use crate::{Error, Result, TemplateEntry, TemplateSet};

/// A rendered template ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub content: String,
}

/// What a template needs, as reported by [`Generator::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub path: String,
    pub destination: String,
    pub variables: Vec<String>,
    pub filters: Vec<String>,
}

/// Renders every template of a set.
#[derive(Debug)]
pub struct Generator<'a> {
    templates: &'a TemplateSet,
    renderer: Renderer,
}

impl<'a> Generator<'a> {
    pub fn new(templates: &'a TemplateSet) -> Self {
        Self::with_renderer(templates, Renderer::new())
    }

    pub fn with_renderer(templates: &'a TemplateSet, renderer: Renderer) -> Self {
        Self {
            templates,
            renderer,
        }
    }

    /// Render every template and its destination path.
    ///
    /// Nothing is returned unless every template renders: the first failure
    /// aborts the whole generation.
    pub fn generate(&self, vars: &VariableSet) -> Result<Generation> {
        let mut files: Vec<RenderedFile> = Vec::with_capacity(self.templates.len());
        let mut owners: Vec<&str> = Vec::with_capacity(self.templates.len());

        for entry in self.templates.entries() {
            let file = self.render_entry(entry, vars)?;

            if let Some(i) = files.iter().position(|f| f.path == file.path) {
                return Err(Box::new(Error::DuplicateDestination {
                    path: file.path,
                    first: owners[i].to_string(),
                    second: entry.path().to_string(),
                }));
            }

            tracing::debug!(template = entry.path(), path = %file.path.display(), "rendered");
            owners.push(entry.path());
            files.push(file);
        }

        Ok(Generation { files })
    }

    /// Check every template for syntax errors and unknown filters.
    pub fn check(&self) -> Result<Vec<TemplateInfo>> {
        self.templates
            .entries()
            .iter()
            .map(|entry| -> Result<TemplateInfo> {
                let mut variables = self.renderer.check(entry.template())?;
                variables.extend(self.renderer.check(entry.destination())?);
                variables.sort_unstable();
                variables.dedup();

                Ok(TemplateInfo {
                    path: entry.path().to_string(),
                    destination: entry.destination().source().to_string(),
                    variables: variables.into_iter().map(String::from).collect(),
                    filters: entry
                        .template()
                        .filters()?
                        .into_iter()
                        .map(String::from)
                        .collect(),
                })
            })
            .collect()
    }

    fn render_entry(&self, entry: &TemplateEntry, vars: &VariableSet) -> Result<RenderedFile> {
        let content = self.renderer.render(entry.template(), vars)?;
        let destination = self.renderer.render(entry.destination(), vars)?;

        Ok(RenderedFile {
            path: relative_path(&destination, entry.path())?,
            content,
        })
    }
}

/// Accept only paths that stay below the output directory.
fn relative_path(destination: &str, template: &str) -> Result<PathBuf> {
    let path = Path::new(destination);
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Box::new(Error::UnsafePath {
                    path: destination.to_string(),
                    template: template.to_string(),
                }));
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(Box::new(Error::UnsafePath {
            path: destination.to_string(),
            template: template.to_string(),
        }));
    }

    Ok(normalized)
}

/// The files produced by one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    files: Vec<RenderedFile>,
}

/// Which files a [`Generation::write`] created and which it left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl Generation {
    pub fn files(&self) -> &[RenderedFile] {
        &self.files
    }

    /// Get a rendered file by its relative path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }

    /// Write every file under `output_dir`, mirroring the relative paths.
    pub fn write(&self, output_dir: &Path, overwrite: Overwrite) -> Result<WriteSummary> {
        let mut summary = WriteSummary::default();

        for file in &self.files {
            let result = File::new(output_dir.join(&file.path), file.content.as_str())
                .with_overwrite(overwrite)
                .write()?;

            match result {
                WriteResult::Written => summary.written.push(file.path.clone()),
                WriteResult::Skipped => summary.skipped.push(file.path.clone()),
            }
        }

        tracing::info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            output = %output_dir.display(),
            "wrote library skeleton"
        );
        Ok(summary)
    }
}
