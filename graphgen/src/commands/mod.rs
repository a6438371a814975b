mod check;
mod completions;
mod generate;
mod list;

use std::path::Path;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use graphgen_model::{Model, parse_file};
use list::ListCommand;

/// Extension trait for exiting on model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for graphgen_model::Result<T> {
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

/// Load a model file, exiting with a rendered diagnostic when it is invalid.
pub(crate) fn load_model(path: &Path) -> Model {
    tracing::debug!(path = %path.display(), "loading model");
    parse_file(path).unwrap_or_exit()
}

#[derive(Parser)]
#[command(name = "graphgen")]
#[command(version)]
#[command(about = "Generate C++ SDK headers from a service model")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one header per derived entity
    Generate(GenerateCommand),

    /// Validate the model and derive every name without writing files
    Check(CheckCommand),

    /// List every derived entity with its role
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
