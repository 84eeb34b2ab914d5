//! The resolved values a render pass substitutes into templates.

use indexmap::IndexMap;

/// Mapping from placeholder name to value.
///
/// Names are case-sensitive: `name` and `Name` are different variables.
/// A set is assembled with [`VariableSet::builder`] and cannot be changed
/// once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    vars: IndexMap<String, String>,
}

impl VariableSet {
    pub fn builder() -> VariableSetBuilder {
        VariableSetBuilder::default()
    }

    /// Get a variable value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Variable names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// All variable entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariableSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        VariableSet::builder().extend(iter).build()
    }
}

/// Accumulates variables before freezing them into a [`VariableSet`].
#[derive(Debug, Clone, Default)]
pub struct VariableSetBuilder {
    vars: IndexMap<String, String>,
}

impl VariableSetBuilder {
    /// Set a variable, replacing any earlier value under the same name
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set every pair, later pairs replacing earlier ones
    pub fn extend<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Parse `KEY=VALUE` strings and set them as variables.
    ///
    /// Returns the first entry without an `=` as the error.
    pub fn set_pairs<'a>(
        mut self,
        pairs: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, &'a str> {
        for pair in pairs {
            let (key, value) = pair.split_once('=').ok_or(pair)?;
            self = self.set(key.trim(), value.trim());
        }
        Ok(self)
    }

    pub fn build(self) -> VariableSet {
        VariableSet { vars: self.vars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_case_sensitive() {
        let vars = VariableSet::builder()
            .set("name", "doit")
            .set("Name", "Doit")
            .build();

        assert_eq!(vars.get("name"), Some("doit"));
        assert_eq!(vars.get("Name"), Some("Doit"));
        assert_eq!(vars.get("NAME"), None);
    }

    #[test]
    fn test_set_replaces_and_keeps_order() {
        let vars = VariableSet::builder()
            .set("name", "a")
            .set("author", "b")
            .set("name", "c")
            .build();

        assert_eq!(vars.names().collect::<Vec<_>>(), vec!["name", "author"]);
        assert_eq!(vars.get("name"), Some("c"));
    }

    #[test]
    fn test_set_pairs() {
        let vars = VariableSet::builder()
            .set_pairs(["board = photon", "license=MIT=ish"])
            .unwrap()
            .build();

        assert_eq!(vars.get("board"), Some("photon"));
        assert_eq!(vars.get("license"), Some("MIT=ish"));

        let err = VariableSet::builder().set_pairs(["novalue"]).unwrap_err();
        assert_eq!(err, "novalue");
    }

    #[test]
    fn test_from_iter() {
        let vars: VariableSet = [("name", "doit"), ("author", "Borges")].into_iter().collect();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains("author"));
        assert!(!vars.is_empty());
    }
}
