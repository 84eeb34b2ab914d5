//! Snapshot tests for the built-in library skeleton.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use libinit_library::{Generation, Generator, LibraryDescriptor, TemplateSet};
use libinit_template::VariableSet;

fn generate(name: &str, version: &str, author: &str) -> Generation {
    let library = LibraryDescriptor::new(name, version, author).expect("invalid descriptor");
    let vars = library
        .variables(&VariableSet::default())
        .expect("failed to derive variables");
    let templates = TemplateSet::builtin();

    Generator::new(&templates)
        .generate(&vars)
        .expect("failed to generate")
}

fn content<'a>(generation: &'a Generation, path: &str) -> &'a str {
    &generation
        .file(path)
        .unwrap_or_else(|| panic!("{path} not generated"))
        .content
}

#[test]
fn test_nominative_header() {
    let generation = generate("nominative", "1.2.3", "Borges <borges@example.com>");
    let header = content(&generation, "src/nominative.h");
    insta::assert_snapshot!("nominative_header", header);
}

#[test]
fn test_nominative_source() {
    let generation = generate("nominative", "1.2.3", "Borges <borges@example.com>");
    let source = content(&generation, "src/nominative.cpp");
    insta::assert_snapshot!("nominative_source", source);
}

#[test]
fn test_nominative_example() {
    let generation = generate("nominative", "1.2.3", "Borges <borges@example.com>");
    let example = content(&generation, "examples/doit/doit_example.cpp");
    insta::assert_snapshot!("nominative_example", example);
}

#[test]
fn test_nominative_properties() {
    let generation = generate("nominative", "1.2.3", "Borges <borges@example.com>");
    let properties = content(&generation, "library.properties");
    insta::assert_snapshot!("nominative_properties", properties);
}

#[test]
fn test_doit_header() {
    let generation = generate("doit", "0.0.1", "Borges");
    let header = content(&generation, "src/doit.h");

    assert!(header.contains("class Doit\n"));
    assert!(header.contains("/* doit library by Borges\n"));
    assert!(!header.contains("<%"));
    assert!(!header.contains("%>"));
}

#[test]
fn test_no_placeholders_remain() {
    let generation = generate("neo-pixel", "2.0.0", "Ada & co");

    for file in generation.files() {
        assert!(!file.content.contains("<%"), "{}", file.path.display());
        assert!(!file.content.contains("%>"), "{}", file.path.display());
    }

    let source = content(&generation, "src/neo-pixel.cpp");
    assert!(source.contains("#include \"neo-pixel.h\""));
    assert!(source.contains("Neopixel::Neopixel()"));
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate("doit", "0.0.1", "Borges");
    let second = generate("doit", "0.0.1", "Borges");
    assert_eq!(first, second);
}
