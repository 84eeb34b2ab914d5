use miette::Diagnostic;
use thiserror::Error;

/// Result type for libinit-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid library name '{name}'")]
    #[diagnostic(
        code(libinit::invalid_name),
        help(
            "{reason}. Use letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidName { name: String, reason: String },

    #[error("invalid version '{version}'")]
    #[diagnostic(code(libinit::invalid_version), help("versions are formatted like 1.0.0"))]
    InvalidVersion { version: String },

    #[error("failed to write '{path}'")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidVersion {
            version: version.into(),
        })
    }
}
