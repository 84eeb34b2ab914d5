//! Optional `libinit.toml` defaults.
//!
//! ```toml
//! templates = "templates"    # relative to this file
//!
//! [library]
//! author = "Borges <borges@example.com>"
//! version = "0.0.1"
//!
//! [variables]
//! board = "photon"
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use libinit_core::Version;
use libinit_template::VariableSet;
use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::{Error, Result};

/// Defaults read from a config file; command-line values take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Template directory to use instead of the built-in set
    pub templates: Option<PathBuf>,

    #[serde(default)]
    pub library: LibraryDefaults,

    /// Extra variables made available to templates
    #[serde(default)]
    pub variables: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryDefaults {
    pub author: Option<String>,
    pub version: Option<Version>,
}

impl Config {
    pub const FILE_NAME: &'static str = "libinit.toml";

    /// Parse a config file.
    ///
    /// A relative `templates` path is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_str_with_filename(&content, &path.display().to_string())?;

        config.templates = config.templates.map(|templates| match path.parent() {
            Some(base) if templates.is_relative() => base.join(templates),
            _ => templates,
        });

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise `libinit.toml` in the current directory
    /// if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(Self::FILE_NAME).is_file() => Self::from_file(Self::FILE_NAME),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a string, using `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| {
            Box::new(Error::ConfigParse {
                src: NamedSource::new(filename, content.to_string()),
                span: source.span().map(SourceSpan::from),
                filename: filename.to_string(),
                source,
            })
        })
    }

    /// Config variables as a [`VariableSet`].
    pub fn variables(&self) -> VariableSet {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}
