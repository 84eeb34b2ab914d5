use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// What [`File::write`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file already existed and [`Overwrite::IfMissing`] was in effect
    Skipped,
}

/// Policy for files that already exist at the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace existing content
    Always,
    /// Leave existing files untouched
    #[default]
    IfMissing,
}

/// Rendered content bound to a path on disk.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Write the content, creating missing parent directories.
    pub fn write(&self) -> Result<WriteResult> {
        if self.overwrite == Overwrite::IfMissing && self.path.exists() {
            tracing::debug!(path = %self.path.display(), "keeping existing file");
            return Ok(WriteResult::Skipped);
        }

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
        }
        std::fs::write(&self.path, &self.content).map_err(|e| io_error(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Box<Error> {
    Box::new(Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
