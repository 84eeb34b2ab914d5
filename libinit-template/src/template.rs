use std::ops::Range;

use miette::{NamedSource, SourceSpan};

use crate::{
    Error, Result,
    placeholder::{self, Placeholder, Segment, Spanned, SyntaxError},
};

/// A named block of template text.
///
/// The name identifies the template in diagnostics, typically its path
/// inside the template set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Get the template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Split the template into text and placeholders.
    pub fn segments(&self) -> Result<Vec<Segment<'_>>> {
        placeholder::parse(&self.source).map_err(|e| self.syntax_error(e))
    }

    /// Placeholders in order of appearance.
    pub fn placeholders(&self) -> Result<Vec<Placeholder<'_>>> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(p) => Some(p),
                Segment::Text(_) => None,
            })
            .collect())
    }

    /// Sorted, deduplicated names of the variables this template references.
    pub fn variables(&self) -> Result<Vec<&str>> {
        let mut vars: Vec<&str> = self
            .placeholders()?
            .into_iter()
            .map(|p| p.variable.name)
            .collect();
        vars.sort_unstable();
        vars.dedup();
        Ok(vars)
    }

    /// Sorted, deduplicated names of the filters this template applies.
    pub fn filters(&self) -> Result<Vec<&str>> {
        let mut filters: Vec<&str> = self
            .placeholders()?
            .into_iter()
            .flat_map(|p| p.filters.into_iter().map(|f| f.name))
            .collect();
        filters.sort_unstable();
        filters.dedup();
        Ok(filters)
    }

    /// Create a NamedSource for miette error reporting.
    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    fn syntax_error(&self, error: SyntaxError) -> Box<Error> {
        Box::new(match error {
            SyntaxError::Unterminated { span } => Error::UnterminatedPlaceholder {
                src: self.named_source(),
                span: to_span(span),
                template: self.name.clone(),
            },
            SyntaxError::Malformed { span, reason } => Error::MalformedPlaceholder {
                src: self.named_source(),
                span: to_span(span),
                template: self.name.clone(),
                reason,
            },
        })
    }

    pub(crate) fn unresolved_error(&self, variable: &Spanned<'_>, available: String) -> Box<Error> {
        Box::new(Error::UnresolvedPlaceholder {
            src: self.named_source(),
            span: to_span(variable.span.clone()),
            variable: variable.name.to_string(),
            template: self.name.clone(),
            available,
        })
    }

    pub(crate) fn unknown_filter_error(
        &self,
        filter: &Spanned<'_>,
        available: String,
    ) -> Box<Error> {
        Box::new(Error::UnknownFilter {
            src: self.named_source(),
            span: to_span(filter.span.clone()),
            filter: filter.name.to_string(),
            template: self.name.clone(),
            available,
        })
    }
}

fn to_span(range: Range<usize>) -> SourceSpan {
    SourceSpan::from((range.start, range.end - range.start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_sorted_and_deduplicated() {
        let template = Template::new(
            "src/library.cpp",
            "<%- Name_code %>::<%- Name_code %>() /* <%- name %> by <%- author %> */",
        );

        assert_eq!(
            template.variables().unwrap(),
            vec!["Name_code", "author", "name"]
        );
    }

    #[test]
    fn test_filters() {
        let template = Template::new("t", "<%= name | snake | upper %> <%= name | upper %>");
        assert_eq!(template.filters().unwrap(), vec!["snake", "upper"]);
    }

    #[test]
    fn test_syntax_error_names_template() {
        let template = Template::new("src/library.h", "class <%-Name_code");
        let err = template.segments().unwrap_err();

        assert_eq!(err.template(), "src/library.h");
        match *err {
            Error::UnterminatedPlaceholder { span, .. } => {
                assert_eq!(span.offset(), 6);
                assert_eq!(span.len(), 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_error_reason() {
        let template = Template::new("t", "<%= 9lives %>");
        let err = template.variables().unwrap_err();

        assert!(matches!(
            *err,
            Error::MalformedPlaceholder { ref reason, .. } if reason.contains("9lives")
        ));
    }
}
