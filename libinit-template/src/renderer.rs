use crate::{
    FilterTable, Result, Template, VariableSet,
    placeholder::{Placeholder, Segment},
};

/// Substitutes variables into templates using a fixed filter table.
///
/// Rendering is a pure function of the template, the variables and the
/// filter table: the same inputs always produce the same output, and a
/// renderer can be shared freely between templates.
#[derive(Debug, Clone)]
pub struct Renderer {
    filters: FilterTable,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// A renderer with the standard filters.
    pub fn new() -> Self {
        Self::with_filters(FilterTable::standard())
    }

    pub fn with_filters(filters: FilterTable) -> Self {
        Self { filters }
    }

    pub fn filters(&self) -> &FilterTable {
        &self.filters
    }

    /// Render a template.
    ///
    /// Every placeholder is replaced in a single left-to-right pass.
    /// Substituted values are never scanned again, so a value that looks like
    /// a placeholder is inserted literally. Fails on the first placeholder
    /// whose variable is missing or whose filter is unknown.
    pub fn render(&self, template: &Template, vars: &VariableSet) -> Result<String> {
        let segments = template.segments()?;
        let mut out = String::with_capacity(template.source().len());

        for segment in &segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => {
                    out.push_str(&self.expand(template, placeholder, vars)?)
                }
            }
        }

        tracing::trace!(
            template = template.name(),
            segments = segments.len(),
            "rendered template"
        );
        Ok(out)
    }

    /// Check a template's syntax and filters without rendering it.
    ///
    /// Returns the variables the template needs.
    pub fn check<'t>(&self, template: &'t Template) -> Result<Vec<&'t str>> {
        for placeholder in template.placeholders()? {
            for filter in &placeholder.filters {
                if !self.filters.contains(filter.name) {
                    return Err(template.unknown_filter_error(filter, self.filters.names()));
                }
            }
        }
        template.variables()
    }

    fn expand(
        &self,
        template: &Template,
        placeholder: &Placeholder<'_>,
        vars: &VariableSet,
    ) -> Result<String> {
        let value = vars
            .get(placeholder.variable.name)
            .ok_or_else(|| template.unresolved_error(&placeholder.variable, available(vars)))?;

        let mut value = value.to_string();
        for filter in &placeholder.filters {
            let f = self
                .filters
                .get(filter.name)
                .ok_or_else(|| template.unknown_filter_error(filter, self.filters.names()))?;
            value = (f.apply)(&value);
        }

        Ok(placeholder.marker.finish(value))
    }
}

fn available(vars: &VariableSet) -> String {
    if vars.is_empty() {
        return "(none)".to_string();
    }
    vars.names().collect::<Vec<_>>().join(", ")
}
