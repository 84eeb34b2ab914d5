//! The library being generated: its name, version and author.

use libinit_core::{Version, capitalize, derive_class_identifier};
use libinit_template::VariableSet;

use crate::{Error, FieldError, Result};

const REQUIRED_FIELDS: &[&str] = &["name", "version", "author"];

/// Variables derived from the descriptor; extra variables cannot replace them.
const RESERVED_VARIABLES: &[&str] = &["name", "version", "author", "Name", "Name_code"];

/// Validate one descriptor field.
///
/// Returns `None` if the value is acceptable. Fields other than `name`,
/// `version` and `author` are not checked.
pub fn validate_field(field: &str, value: &str) -> Option<FieldError> {
    let field = match REQUIRED_FIELDS.iter().find(|f| **f == field) {
        Some(f) => *f,
        None => return None,
    };

    if value.trim().is_empty() {
        return Some(FieldError {
            field,
            message: "can't be blank",
        });
    }

    match field {
        "name" if !is_valid_library_name(value) => Some(FieldError {
            field,
            message: "must only contain letters, numbers, dashes and underscores",
        }),
        // The class name is derived from the library name
        "name" if derive_class_identifier(value).is_err() => Some(FieldError {
            field,
            message: "must start with a letter",
        }),
        "version" if value.parse::<Version>().is_err() => Some(FieldError {
            field,
            message: "must be formatted like 1.0.0",
        }),
        _ => None,
    }
}

/// `^[A-Za-z0-9][A-Za-z0-9-_]+$`
fn is_valid_library_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }

    let rest = chars.as_str();
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A validated library descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDescriptor {
    name: String,
    version: Version,
    author: String,
}

impl LibraryDescriptor {
    /// Validate and build a descriptor.
    ///
    /// Every field is checked; all failures are reported together.
    pub fn new(name: &str, version: &str, author: &str) -> Result<Self> {
        let errors: Vec<FieldError> = [("name", name), ("version", version), ("author", author)]
            .into_iter()
            .filter_map(|(field, value)| validate_field(field, value))
            .collect();

        if !errors.is_empty() {
            return Err(Box::new(Error::InvalidDescriptor { errors }));
        }

        Ok(Self {
            name: name.to_string(),
            version: version.parse()?,
            author: author.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Name of the C++ class the generated library exports (e.g., "neo-pixel" -> "Neopixel")
    pub fn class_name(&self) -> Result<String> {
        Ok(capitalize(&derive_class_identifier(&self.name)?))
    }

    /// The variables templates are rendered with.
    ///
    /// `extra` supplies additional variables; it cannot override `name`,
    /// `version`, `author`, `Name` or `Name_code`.
    pub fn variables(&self, extra: &VariableSet) -> Result<VariableSet> {
        let class_name = self.class_name()?;

        for name in ignored_variables(extra) {
            tracing::warn!(variable = name, "ignoring extra variable with a reserved name");
        }

        Ok(VariableSet::builder()
            .extend(extra.iter())
            .set("name", self.name.as_str())
            .set("version", self.version.to_string())
            .set("author", self.author.as_str())
            .set("Name", class_name.as_str())
            .set("Name_code", class_name)
            .build())
    }
}

/// Extra variables shadowed by the descriptor's own.
fn ignored_variables(extra: &VariableSet) -> Vec<&str> {
    extra
        .names()
        .filter(|name| RESERVED_VARIABLES.contains(name))
        .collect()
}
