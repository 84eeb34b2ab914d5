//! Core operations.
//!
//! This module contains the business logic for libinit commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod init;
pub mod list;

use libinit_library::TemplateSource;

pub use check::check;
pub use init::{InitOptions, init};
pub use list::list;

/// Human-readable origin of a template set.
fn describe_source(source: &TemplateSource) -> String {
    match source {
        TemplateSource::Builtin => "built-in".to_string(),
        TemplateSource::Directory(dir) => dir.display().to_string(),
    }
}
