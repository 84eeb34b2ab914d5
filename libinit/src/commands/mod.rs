mod check;
mod completions;
mod init;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use list::ListCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for libinit_library::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "libinit")]
#[command(version)]
#[command(about = "Scaffold a new device library from templates")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new library skeleton
    Init(InitCommand),

    /// Validate a template set without rendering it
    Check(CheckCommand),

    /// List the templates of a set and the available filters
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
