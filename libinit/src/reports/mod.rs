//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod init;
mod list;
mod output;

pub use check::CheckReport;
pub use init::{InitReport, InitResult, PreviewFile, PreviewResult, WrittenResult};
pub use list::{FilterInfo, ListReport, TemplateListing};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
