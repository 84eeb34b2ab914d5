//! Placeholder substitution for libinit templates.
//!
//! This is not a general templating engine: a template is plain
//! text with `<%= var %>` / `<%- var %>` markers, each optionally piped
//! through named filters. There are no loops, conditionals or includes.
//!
//! ```
//! use libinit_template::{Renderer, Template, VariableSet};
//!
//! let vars = VariableSet::builder()
//!     .set("name", "doit")
//!     .set("author", "Borges")
//!     .build();
//! let template = Template::new("greeting", "<%- name | capitalize %> by <%= author %>");
//!
//! let out = Renderer::new().render(&template, &vars).unwrap();
//! assert_eq!(out, "Doit by Borges");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod filter;
pub mod placeholder;
mod renderer;
mod template;
mod variables;

pub use error::{Error, Result};
pub use filter::{Filter, FilterTable, STANDARD_FILTERS};
pub use placeholder::Marker;
pub use renderer::Renderer;
pub use template::Template;
pub use variables::{VariableSet, VariableSetBuilder};

/// Render a template with the standard filter table.
pub fn render(template: &Template, vars: &VariableSet) -> Result<String> {
    Renderer::new().render(template, vars)
}
