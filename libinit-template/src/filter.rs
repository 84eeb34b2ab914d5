//! Named value transformations usable inside placeholders.

use indexmap::IndexMap;
use libinit_core::{capitalize, sanitize_identifier, to_pascal_case, to_snake_case};

/// A named pure transformation applied to a variable's value.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    /// Name used in templates, e.g. `capitalize` in `<%= name | capitalize %>`
    pub name: &'static str,
    /// One-line description shown by `libinit list`
    pub description: &'static str,
    /// The transformation itself
    pub apply: fn(&str) -> String,
}

impl Filter {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        apply: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            description,
            apply,
        }
    }
}

fn lower(s: &str) -> String {
    s.to_lowercase()
}

fn upper(s: &str) -> String {
    s.to_uppercase()
}

fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Filters available to every template.
pub const STANDARD_FILTERS: &[Filter] = &[
    Filter::new("capitalize", "upper-case the first character", capitalize),
    Filter::new("lower", "lower-case every character", lower),
    Filter::new("upper", "upper-case every character", upper),
    Filter::new("trim", "strip surrounding whitespace", trim),
    Filter::new(
        "pascal",
        "join words separated by '_', '-' or ' ' in PascalCase",
        to_pascal_case,
    ),
    Filter::new("snake", "convert to snake_case", to_snake_case),
    Filter::new(
        "identifier",
        "drop characters outside [A-Za-z0-9_]",
        sanitize_identifier,
    ),
];

/// Lookup table from filter name to [`Filter`], in registration order.
#[derive(Debug, Clone, Default)]
pub struct FilterTable {
    filters: IndexMap<&'static str, Filter>,
}

impl FilterTable {
    /// A table with no filters; placeholders may still omit filters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table containing [`STANDARD_FILTERS`].
    pub fn standard() -> Self {
        STANDARD_FILTERS
            .iter()
            .fold(Self::empty(), |table, filter| table.with(*filter))
    }

    /// Register a filter, replacing any filter with the same name.
    pub fn with(mut self, filter: Filter) -> Self {
        self.filters.insert(filter.name, filter);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Filters in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.values()
    }

    /// Comma-separated filter names, for diagnostics
    pub fn names(&self) -> String {
        if self.filters.is_empty() {
            return "(none)".to_string();
        }
        self.filters.keys().copied().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_filters() {
        let table = FilterTable::standard();
        let apply = |name: &str, value: &str| (table.get(name).unwrap().apply)(value);

        assert_eq!(apply("capitalize", "doit"), "Doit");
        assert_eq!(apply("lower", "DoIt"), "doit");
        assert_eq!(apply("upper", "doit"), "DOIT");
        assert_eq!(apply("trim", "  doit "), "doit");
        assert_eq!(apply("pascal", "neo-pixel"), "NeoPixel");
        assert_eq!(apply("snake", "NeoPixel"), "neo_pixel");
        assert_eq!(apply("snake", "Neo Pixel"), "neo_pixel");
        assert_eq!(apply("identifier", "My Lib!"), "MyLib");
    }

    #[test]
    fn test_empty_table() {
        let table = FilterTable::empty();
        assert!(!table.contains("capitalize"));
        assert_eq!(table.names(), "(none)");
    }

    #[test]
    fn test_with_replaces_same_name() {
        fn shout(s: &str) -> String {
            format!("{}!", s.to_uppercase())
        }

        let table = FilterTable::standard().with(Filter::new("upper", "shout", shout));
        assert_eq!((table.get("upper").unwrap().apply)("hi"), "HI!");
        assert_eq!(table.iter().count(), STANDARD_FILTERS.len());
    }

    #[test]
    fn test_names_in_registration_order() {
        let table = FilterTable::standard();
        assert!(table.names().starts_with("capitalize, lower, upper"));
    }
}
