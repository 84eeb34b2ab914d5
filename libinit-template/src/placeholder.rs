//! Placeholder syntax.
//!
//! Templates use two marker styles:
//!
//! - `<%= expr %>` inserts the value trimmed and HTML-escaped
//! - `<%- expr %>` inserts the value as-is
//!
//! where `expr` is a variable name followed by zero or more `| filter`
//! applications. `<%%` produces a literal `<%`. Anything else starting with
//! `<%` is rejected.

use std::ops::Range;

const OPEN: &str = "<%";
const CLOSE: &str = "%>";

/// How a placeholder's final value is written into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `<%= … %>`
    Escaped,
    /// `<%- … %>`
    Raw,
}

impl Marker {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Marker::Escaped),
            '-' => Some(Marker::Raw),
            _ => None,
        }
    }

    /// Apply the marker's output treatment to a filtered value.
    pub fn finish(self, value: String) -> String {
        match self {
            Marker::Escaped => escape_html(value.trim()),
            Marker::Raw => value,
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// A name inside a placeholder together with its byte range in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub name: &'a str,
    pub span: Range<usize>,
}

/// A parsed `<%… %>` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub variable: Spanned<'a>,
    pub filters: Vec<Spanned<'a>>,
    pub marker: Marker,
    /// Byte range of the whole marker, delimiters included
    pub span: Range<usize>,
}

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder(Placeholder<'a>),
}

/// Why a template failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SyntaxError {
    Unterminated { span: Range<usize> },
    Malformed { span: Range<usize>, reason: String },
}

/// Split template text into literal text and placeholders in one left-to-right pass.
pub(crate) fn parse(src: &str) -> Result<Vec<Segment<'_>>, SyntaxError> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(found) = src[cursor..].find(OPEN) {
        let start = cursor + found;
        let after_open = start + OPEN.len();

        let marker = match src[after_open..].chars().next() {
            Some('%') => {
                // `<%%` is an escaped `<%`; keep the first two bytes as text
                segments.push(Segment::Text(&src[text_start..after_open]));
                cursor = after_open + 1;
                text_start = cursor;
                continue;
            }
            Some(c) => Marker::from_char(c).ok_or_else(|| SyntaxError::Malformed {
                span: start..after_open,
                reason: "only '<%=' and '<%-' tags are supported".to_string(),
            })?,
            None => return Err(SyntaxError::Unterminated { span: start..src.len() }),
        };

        let body_start = after_open + 1;
        let body_end = src[body_start..]
            .find(CLOSE)
            .map(|i| body_start + i)
            .ok_or(SyntaxError::Unterminated {
                span: start..body_start,
            })?;
        let end = body_end + CLOSE.len();

        let placeholder = parse_expr(src, body_start..body_end, marker, start..end)?;

        if text_start < start {
            segments.push(Segment::Text(&src[text_start..start]));
        }
        segments.push(Segment::Placeholder(placeholder));
        cursor = end;
        text_start = end;
    }

    if text_start < src.len() {
        segments.push(Segment::Text(&src[text_start..]));
    }

    Ok(segments)
}

fn parse_expr<'a>(
    src: &'a str,
    body: Range<usize>,
    marker: Marker,
    span: Range<usize>,
) -> Result<Placeholder<'a>, SyntaxError> {
    let mut parts = Vec::new();
    let mut offset = body.start;
    for part in src[body.clone()].split('|') {
        parts.push(spanned_name(part, offset, &span)?);
        offset += part.len() + 1;
    }

    let mut parts = parts.into_iter();
    let variable = parts.next().ok_or_else(|| SyntaxError::Malformed {
        span: span.clone(),
        reason: "missing variable name".to_string(),
    })?;

    Ok(Placeholder {
        variable,
        filters: parts.collect(),
        marker,
        span,
    })
}

fn spanned_name<'a>(
    part: &'a str,
    offset: usize,
    placeholder: &Range<usize>,
) -> Result<Spanned<'a>, SyntaxError> {
    let name = part.trim();
    if name.is_empty() {
        return Err(SyntaxError::Malformed {
            span: placeholder.clone(),
            reason: "empty name".to_string(),
        });
    }

    let start = offset + (part.len() - part.trim_start().len());
    let span = start..start + name.len();

    if !libinit_core::is_identifier(name) {
        return Err(SyntaxError::Malformed {
            span,
            reason: format!("'{name}' is not a valid name"),
        });
    }

    Ok(Spanned { name, span })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders<'a>(segments: &'a [Segment<'a>]) -> Vec<&'a Placeholder<'a>> {
        segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder(p) => Some(p),
                Segment::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_plain_text() {
        let segments = parse("no placeholders here").unwrap();
        assert_eq!(segments, vec![Segment::Text("no placeholders here")]);
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_both_markers() {
        let src = "<%- name %> by <%=author%>";
        let segments = parse(src).unwrap();
        let found = placeholders(&segments);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].variable.name, "name");
        assert_eq!(found[0].marker, Marker::Raw);
        assert_eq!(found[0].span, 0..11);
        assert_eq!(found[1].variable.name, "author");
        assert_eq!(found[1].marker, Marker::Escaped);
        assert_eq!(&src[found[1].variable.span.clone()], "author");
        assert_eq!(segments[1], Segment::Text(" by "));
    }

    #[test]
    fn test_parse_filters() {
        let src = "class <%- name | identifier | capitalize %>";
        let segments = parse(src).unwrap();
        let p = placeholders(&segments)[0];

        let filters: Vec<_> = p.filters.iter().map(|f| f.name).collect();
        assert_eq!(filters, vec!["identifier", "capitalize"]);
        assert_eq!(&src[p.filters[1].span.clone()], "capitalize");
    }

    #[test]
    fn test_parse_escaped_open() {
        let segments = parse("a <%% b").unwrap();
        let text: String = segments
            .iter()
            .map(|s| match s {
                Segment::Text(t) => *t,
                Segment::Placeholder(_) => unreachable!(),
            })
            .collect();
        assert_eq!(text, "a <% b");
    }

    #[test]
    fn test_parse_unterminated() {
        assert_eq!(
            parse("x <%= name").unwrap_err(),
            SyntaxError::Unterminated { span: 2..5 }
        );
        assert_eq!(
            parse("x <%").unwrap_err(),
            SyntaxError::Unterminated { span: 2..4 }
        );
    }

    #[test]
    fn test_parse_scriptlet_rejected() {
        let err = parse("<% if (x) { %>").unwrap_err();
        assert!(matches!(err, SyntaxError::Malformed { span, .. } if span == (0..2)));
    }

    #[test]
    fn test_parse_invalid_names() {
        assert!(matches!(
            parse("<%= %>").unwrap_err(),
            SyntaxError::Malformed { .. }
        ));
        assert!(matches!(
            parse("<%= name | %>").unwrap_err(),
            SyntaxError::Malformed { .. }
        ));
        let err = parse("<%= my-name %>").unwrap_err();
        assert!(matches!(err, SyntaxError::Malformed { span, .. } if span == (4..11)));
    }

    #[test]
    fn test_marker_finish() {
        assert_eq!(
            Marker::Escaped.finish("  Borges <b@x.com> ".to_string()),
            "Borges &lt;b@x.com&gt;"
        );
        assert_eq!(
            Marker::Raw.finish(" Borges <b@x.com>".to_string()),
            " Borges <b@x.com>"
        );
        assert_eq!(Marker::Escaped.finish("a&'\"".to_string()), "a&amp;&#39;&#34;");
    }
}
