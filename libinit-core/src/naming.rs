//! Name derivation for generated libraries.
//!
//! A library's human-facing name may contain spaces, dashes and other
//! punctuation, while the class it exports needs a plain source identifier.
//! The functions here turn one into the other.

use crate::{Error, Result};

/// Strip every character outside `[A-Za-z0-9_]`.
///
/// Only ASCII letters and digits survive; the result may be empty or start
/// with a digit. Use [`derive_class_identifier`] when a valid identifier is
/// required.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Derive a type identifier from a free-form library name.
///
/// Characters that cannot appear in an identifier are removed (so
/// `"My Lib!"` becomes `"MyLib"`). Names that sanitize to nothing, or whose
/// sanitized form starts with a digit, are rejected rather than patched up.
pub fn derive_class_identifier(name: &str) -> Result<String> {
    let identifier = sanitize_identifier(name);

    match identifier.chars().next() {
        None => Err(Error::invalid_name(
            name,
            "name contains no letters, numbers, or underscores",
        )),
        Some(c) if c.is_ascii_digit() => Err(Error::invalid_name(
            name,
            "identifier derived from the name would start with a digit",
        )),
        Some(_) => Ok(identifier),
    }
}

/// Upper-case the first character, leaving the rest unchanged (e.g., "myLib" -> "MyLib")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Check whether `s` matches `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Dashes, spaces and underscores all separate words.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' ']).map(capitalize).collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
///
/// Dashes and spaces become underscores; a word boundary never produces
/// more than one underscore.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '_' | '-' | ' ') {
            if !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_uppercase() && !result.is_empty() && !result.ends_with('_') {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("My Lib!"), "MyLib");
        assert_eq!(sanitize_identifier("my-lib_2"), "mylib_2");
        assert_eq!(sanitize_identifier("caf\u{e9}"), "caf");
        assert_eq!(sanitize_identifier("!!!"), "");
    }

    #[test]
    fn test_derive_class_identifier() {
        assert_eq!(derive_class_identifier("My Lib!").unwrap(), "MyLib");
        assert_eq!(derive_class_identifier("doit").unwrap(), "doit");
        assert_eq!(derive_class_identifier("_private").unwrap(), "_private");
        assert_eq!(derive_class_identifier("neo-pixel").unwrap(), "neopixel");
    }

    #[test]
    fn test_derive_class_identifier_rejects_empty() {
        let err = derive_class_identifier("").unwrap_err();
        assert!(matches!(*err, Error::InvalidName { ref name, .. } if name.is_empty()));

        let err = derive_class_identifier("!!!").unwrap_err();
        assert!(matches!(*err, Error::InvalidName { ref name, .. } if name == "!!!"));
    }

    #[test]
    fn test_derive_class_identifier_rejects_leading_digit() {
        let err = derive_class_identifier("2fast").unwrap_err();
        assert!(matches!(*err, Error::InvalidName { .. }));

        // leading punctuation is stripped before the digit check
        assert!(derive_class_identifier("-9lives").is_err());
    }

    #[test]
    fn test_derived_identifier_is_identifier() {
        for name in ["My Lib!", "doit", "a b c", "x-1"] {
            let id = derive_class_identifier(name).unwrap();
            assert!(is_identifier(&id), "{id}");
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("myLib"), "MyLib");
        assert_eq!(capitalize("doit"), "Doit");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize("_x"), "_x");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("Doit"));
        assert!(is_identifier("_a1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("neo-pixel ring"), "NeoPixelRing");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("FooBarBaz"), "foo_bar_baz");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("hello_world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_single_separator_at_word_boundary() {
        assert_eq!(to_snake_case("Hello World"), "hello_world");
        assert_eq!(to_snake_case("neo-Pixel"), "neo_pixel");
        assert_eq!(to_snake_case("Neo_Pixel Ring"), "neo_pixel_ring");
        assert_eq!(to_snake_case("_Private"), "_private");
    }
}
