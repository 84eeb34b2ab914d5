use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use libinit_library::{Config, TemplateSet};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Template directory (defaults to the built-in templates)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Path to libinit.toml (defaults to ./libinit.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let templates_dir = self.templates.as_deref().or(config.templates.as_deref());
        let templates = TemplateSet::resolve(templates_dir).unwrap_or_exit();

        let report = ops::check(&templates).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
