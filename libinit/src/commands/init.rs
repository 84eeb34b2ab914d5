use std::path::PathBuf;

use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result};
use libinit_core::Overwrite;
use libinit_library::{Config, LibraryDescriptor, TemplateSet, validate_field};
use libinit_template::VariableSet;

use super::UnwrapOrExit;
use crate::{
    ops::{self, InitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the library in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Library name (prompted for when missing)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Library version, formatted like 1.0.0 (prompted for when missing)
    #[arg(long)]
    pub version: Option<String>,

    /// Library author (prompted for when missing)
    #[arg(short, long, env = "LIBINIT_AUTHOR")]
    pub author: Option<String>,

    /// Template directory to use instead of the built-in templates
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Extra template variable, can be repeated
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Print the rendered files without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Path to libinit.toml (defaults to ./libinit.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();

        // Command line first, then config, then ask
        let name = resolve_field(
            "name",
            self.name.clone(),
            None,
            "Enter a name for your library",
        )?;
        let version = resolve_field(
            "version",
            self.version.clone(),
            config.library.version.as_ref().map(ToString::to_string),
            "Enter a version for your library",
        )?;
        let author = resolve_field(
            "author",
            self.author.clone(),
            config.library.author.clone(),
            "Who is the author of your library",
        )?;

        let library = LibraryDescriptor::new(&name, &version, &author).unwrap_or_exit();

        let config_vars = config.variables();
        let extra = VariableSet::builder()
            .extend(config_vars.iter())
            .set_pairs(self.vars.iter().map(String::as_str))
            .map_err(|pair| eyre::eyre!("Invalid variable `{pair}`, expected KEY=VALUE"))?
            .build();

        let templates_dir = self.templates.as_deref().or(config.templates.as_deref());
        let templates = TemplateSet::resolve(templates_dir).unwrap_or_exit();

        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let report = ops::init(
            &library,
            &extra,
            &templates,
            InitOptions {
                output_dir: &self.dir,
                overwrite,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

fn resolve_field(
    field: &'static str,
    flag: Option<String>,
    default: Option<String>,
    prompt: &str,
) -> Result<String> {
    match flag.or(default) {
        Some(value) => Ok(value),
        None => prompt_field(field, prompt),
    }
}

fn prompt_field(field: &'static str, prompt: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            match validate_field(field, input) {
                Some(error) => Err(error.to_string()),
                None => Ok(()),
            }
        })
        .interact_text()
        .wrap_err_with(|| format!("Failed to read the library {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        let value = resolve_field(
            "author",
            Some("Flag".to_string()),
            Some("Config".to_string()),
            "unused",
        )
        .unwrap();
        assert_eq!(value, "Flag");
    }

    #[test]
    fn test_config_used_without_flag() {
        let value =
            resolve_field("author", None, Some("Config".to_string()), "unused").unwrap();
        assert_eq!(value, "Config");
    }
}
