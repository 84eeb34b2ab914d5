use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use libinit_library::{Config, TemplateSet};
use libinit_template::FilterTable;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Template directory (defaults to the built-in templates)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Path to libinit.toml (defaults to ./libinit.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let templates_dir = self.templates.as_deref().or(config.templates.as_deref());
        let templates = TemplateSet::resolve(templates_dir).unwrap_or_exit();

        ops::list(&templates, &FilterTable::standard()).render(&mut TerminalOutput::new());

        Ok(())
    }
}
