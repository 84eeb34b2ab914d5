//! Init command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from creating a library skeleton.
#[derive(Debug)]
pub struct InitReport {
    /// Library name as given.
    pub name: String,

    /// Library version.
    pub version: String,

    /// Class the generated sources declare.
    pub class_name: String,

    /// Where the templates came from.
    pub templates: String,

    /// Files written or previewed.
    pub result: InitResult,
}

/// Result of rendering the skeleton.
#[derive(Debug)]
pub enum InitResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files created or overwritten.
    pub written: Vec<String>,
    /// Existing files left alone.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be written.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            InitResult::Written(written) => self.render_written(out, written),
            InitResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl InitReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!("{} v{}", self.name, self.version));
        out.key_value("Class", &self.class_name);
        out.key_value("Templates", &self.templates);
        out.newline();

        out.key_value("Created in", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(path);
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Already present");
            for path in &written.skipped {
                out.skipped_item(path);
            }
            out.warning(&format!(
                "{} existing files kept, use --force to overwrite them",
                written.skipped.len()
            ));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
