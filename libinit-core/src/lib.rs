//! Core utilities and types for the libinit library generator.
//!
//! This crate provides the name derivation rules, version type and file
//! writing primitives shared by the rest of the workspace.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
pub mod naming;
mod version;

pub use error::{Error, Result};
// File operations
pub use file::{File, Overwrite, WriteResult};
// Name derivation
pub use naming::{
    capitalize, derive_class_identifier, is_identifier, sanitize_identifier, to_pascal_case,
    to_snake_case,
};
pub use version::Version;
