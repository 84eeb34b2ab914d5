//! Template sets: which templates exist and where each one is written.

use std::path::{Path, PathBuf};

use libinit_template::Template;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Built-in templates: (template path, destination pattern, contents).
const BUILTIN: &[(&str, &str, &str)] = &[
    (
        "library.properties",
        "library.properties",
        include_str!("../templates/library.properties"),
    ),
    (
        "src/library.cpp",
        "src/<%- name %>.cpp",
        include_str!("../templates/src/library.cpp"),
    ),
    (
        "src/library.h",
        "src/<%- name %>.h",
        include_str!("../templates/src/library.h"),
    ),
    (
        "examples/doit/doit_example.cpp",
        "examples/doit/doit_example.cpp",
        include_str!("../templates/examples/doit/doit_example.cpp"),
    ),
];

/// One template and the pattern its output path is rendered from.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    template: Template,
    destination: Template,
}

impl TemplateEntry {
    pub fn new(path: &str, destination: &str, contents: impl Into<String>) -> Self {
        Self {
            template: Template::new(path, contents),
            destination: Template::new(format!("{path} (destination)"), destination),
        }
    }

    /// Template path inside the set, e.g. `src/library.h`
    pub fn path(&self) -> &str {
        self.template.name()
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Destination path pattern, e.g. `src/<%- name %>.h`
    pub fn destination(&self) -> &Template {
        &self.destination
    }
}

/// Where a template set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    Directory(PathBuf),
}

/// An ordered collection of templates rendered together.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    source: TemplateSource,
    entries: Vec<TemplateEntry>,
}

impl TemplateSet {
    /// The library skeleton shipped with libinit.
    pub fn builtin() -> Self {
        Self {
            source: TemplateSource::Builtin,
            entries: BUILTIN
                .iter()
                .map(|(path, destination, contents)| {
                    TemplateEntry::new(path, destination, *contents)
                })
                .collect(),
        }
    }

    /// Load every file under `dir` as a template.
    ///
    /// A file's path relative to `dir` (with `/` separators) is both its name
    /// and its destination pattern, so file and directory names may contain
    /// placeholders too. Entries are ordered by path.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                Error::io(path, source)
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(dir)
                .unwrap_or(entry.path())
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let contents = std::fs::read_to_string(entry.path())
                .map_err(|e| Error::io(entry.path(), e))?;

            tracing::debug!(template = %relative, "loaded template");
            entries.push(TemplateEntry::new(&relative, &relative, contents));
        }

        if entries.is_empty() {
            return Err(Box::new(Error::EmptyTemplateSet {
                path: dir.to_path_buf(),
            }));
        }

        Ok(Self {
            source: TemplateSource::Directory(dir.to_path_buf()),
            entries,
        })
    }

    /// Load from `dir` if given, otherwise use the built-in set.
    pub fn resolve(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Ok(Self::builtin()),
        }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_builtin_set() {
        let set = TemplateSet::builtin();
        let paths: Vec<_> = set.entries().iter().map(TemplateEntry::path).collect();

        assert_eq!(set.source(), &TemplateSource::Builtin);
        assert_eq!(
            paths,
            vec![
                "library.properties",
                "src/library.cpp",
                "src/library.h",
                "examples/doit/doit_example.cpp",
            ]
        );
        assert_eq!(set.entries()[2].destination().source(), "src/<%- name %>.h");
    }

    #[test]
    fn test_builtin_templates_parse() {
        for entry in TemplateSet::builtin().entries() {
            assert!(entry.template().segments().is_ok(), "{}", entry.path());
            assert!(entry.destination().segments().is_ok(), "{}", entry.path());
        }
    }

    #[test]
    fn test_from_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src").join("main.cpp"), "// <%- name %>").unwrap();
        fs::write(temp.path().join("README.md"), "# <%- name %>").unwrap();

        let set = TemplateSet::from_dir(temp.path()).unwrap();
        let paths: Vec<_> = set.entries().iter().map(TemplateEntry::path).collect();

        assert_eq!(paths, vec!["README.md", "src/main.cpp"]);
        assert_eq!(set.entries()[1].destination().source(), "src/main.cpp");
        assert_eq!(set.entries()[1].template().source(), "// <%- name %>");
        assert_eq!(
            set.source(),
            &TemplateSource::Directory(temp.path().to_path_buf())
        );
    }

    #[test]
    fn test_from_empty_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();

        let err = TemplateSet::from_dir(temp.path()).unwrap_err();
        assert!(matches!(*err, Error::EmptyTemplateSet { .. }));
    }

    #[test]
    fn test_from_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = TemplateSet::from_dir(temp.path().join("missing")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_resolve_defaults_to_builtin() {
        let set = TemplateSet::resolve(None).unwrap();
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
    }
}
