mod check;
mod completions;
mod generate;
mod languages;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use languages::LanguagesCommand;
use tfgen_schema::{GenerateSection, GeneratorConfig};

/// Extension trait for exiting on schema and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tfgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(e),
        }
    }
}

/// Print a schema or config error as a miette report and exit.
pub(crate) fn exit_with(error: Box<tfgen_schema::Error>) -> ! {
    eprintln!("{:?}", miette::Report::new(*error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "tfgen")]
#[command(version)]
#[command(about = "Generate multi-language SDK packages from a provider schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Languages(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SDK packages for one or more languages
    Generate(GenerateCommand),

    /// Normalize and resolve the provider schema without writing anything
    Check(CheckCommand),

    /// List the supported target languages
    Languages(LanguagesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Inputs shared by `generate` and `check`.
#[derive(Args, Debug, Default)]
pub(crate) struct SchemaArgs {
    /// Provider document (JSON); `-` reads stdin
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Path to the generator config (defaults to ./tfgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Package name (defaults to the document's name)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Directory of Terraform-style markdown docs
    #[arg(long)]
    pub docs: Option<PathBuf>,

    /// Fail when the schema produces warnings
    #[arg(long)]
    pub deny_warnings: bool,
}

impl SchemaArgs {
    /// The `[generate]` table from the explicit config file or `./tfgen.toml`.
    pub fn load_config(&self) -> GenerateSection {
        let config = match &self.config {
            Some(path) => Some(GeneratorConfig::from_file(path).unwrap_or_exit()),
            None => GeneratorConfig::discover(".").unwrap_or_exit(),
        };
        match config {
            Some(config) => {
                tracing::debug!("loaded generator config");
                config.generate
            }
            None => GenerateSection::default(),
        }
    }

    /// The flags as a `[generate]` table, for layering over the config.
    pub fn section(&self) -> GenerateSection {
        GenerateSection {
            package: self.package.clone(),
            schema: self.schema.clone(),
            docs: self.docs.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "tfgen", "-v", "generate", "nodejs", "go", "--schema", "schema.json", "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["tfgen", "-q", "-v", "check"]).is_err());
    }
}
