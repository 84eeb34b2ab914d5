use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for template operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unterminated placeholder in '{template}'")]
    #[diagnostic(
        code(libinit::unterminated_placeholder),
        help("close the placeholder with '%>'")
    )]
    UnterminatedPlaceholder {
        #[source_code]
        src: NamedSource<String>,
        #[label("opened here")]
        span: SourceSpan,
        template: String,
    },

    #[error("malformed placeholder in '{template}': {reason}")]
    #[diagnostic(
        code(libinit::malformed_placeholder),
        help("placeholders look like '<%= name %>', '<%- name %>' or '<%= name | capitalize %>'")
    )]
    MalformedPlaceholder {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        template: String,
        reason: String,
    },

    #[error("unresolved placeholder '{variable}' in '{template}'")]
    #[diagnostic(
        code(libinit::unresolved_placeholder),
        help("defined variables: {available}")
    )]
    UnresolvedPlaceholder {
        #[source_code]
        src: NamedSource<String>,
        #[label("no value for '{variable}'")]
        span: SourceSpan,
        variable: String,
        template: String,
        available: String,
    },

    #[error("unknown filter '{filter}' in '{template}'")]
    #[diagnostic(code(libinit::unknown_filter), help("available filters: {available}"))]
    UnknownFilter {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown filter")]
        span: SourceSpan,
        filter: String,
        template: String,
        available: String,
    },
}

impl Error {
    /// Name of the template the error was raised for
    pub fn template(&self) -> &str {
        match self {
            Error::UnterminatedPlaceholder { template, .. }
            | Error::MalformedPlaceholder { template, .. }
            | Error::UnresolvedPlaceholder { template, .. }
            | Error::UnknownFilter { template, .. } => template,
        }
    }
}
