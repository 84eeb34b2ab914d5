use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for libinit-library operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A single invalid descriptor field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{field} {message}")]
#[diagnostic(code(libinit::invalid_field))]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(libinit_template::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(libinit_core::Error),

    #[error("invalid library descriptor")]
    #[diagnostic(code(libinit::invalid_descriptor))]
    InvalidDescriptor {
        #[related]
        errors: Vec<FieldError>,
    },

    #[error("template '{template}' has destination '{path}' outside the output directory")]
    #[diagnostic(
        code(libinit::unsafe_path),
        help("destinations must be relative paths without '..' components")
    )]
    UnsafePath { path: String, template: String },

    #[error("templates '{first}' and '{second}' both write '{path}'")]
    #[diagnostic(code(libinit::duplicate_destination))]
    DuplicateDestination {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("no templates found in '{path}'")]
    #[diagnostic(code(libinit::empty_template_set))]
    EmptyTemplateSet { path: PathBuf },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(libinit::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

impl From<Box<libinit_template::Error>> for Box<Error> {
    fn from(error: Box<libinit_template::Error>) -> Self {
        Box::new(Error::Template(*error))
    }
}

impl From<Box<libinit_core::Error>> for Box<Error> {
    fn from(error: Box<libinit_core::Error>) -> Self {
        Box::new(Error::Core(*error))
    }
}
