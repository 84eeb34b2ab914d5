//! Library skeleton generation for libinit.
//!
//! Ties the pieces together: a validated [`LibraryDescriptor`] provides the
//! variables, a [`TemplateSet`] provides the templates, and a [`Generator`]
//! renders them into a [`Generation`] that can be written to disk.
//!
//! ```
//! use libinit_library::{Generator, LibraryDescriptor, TemplateSet};
//! use libinit_template::VariableSet;
//!
//! let library = LibraryDescriptor::new("doit", "0.0.1", "Borges").unwrap();
//! let vars = library.variables(&VariableSet::default()).unwrap();
//! let templates = TemplateSet::builtin();
//!
//! let generation = Generator::new(&templates).generate(&vars).unwrap();
//! let header = generation.file("src/doit.h").unwrap();
//! assert!(header.content.contains("class Doit"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod descriptor;
mod error;
mod generator;
mod templates;

pub use config::{Config, LibraryDefaults};
pub use descriptor::{LibraryDescriptor, validate_field};
pub use error::{Error, FieldError, Result};
pub use generator::{Generation, Generator, RenderedFile, TemplateInfo, WriteSummary};
pub use templates::{TemplateEntry, TemplateSet, TemplateSource};
