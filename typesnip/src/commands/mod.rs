mod check;
mod completions;
mod generate;
mod languages;

use std::{
    io::{self, Read},
    path::Path,
};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Context, Result};
use generate::GenerateCommand;
use languages::LanguagesCommand;
use tracing_subscriber::EnvFilter;
use typesnip_schema::CodeGenRequest;

/// Extension trait for exiting on request errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typesnip_schema::Result<T> {
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

/// Read a request from a path, or from stdin when the path is `-`.
pub(crate) fn read_request(path: &Path) -> Result<CodeGenRequest> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .wrap_err("failed to read request from stdin")?;
        return Ok(CodeGenRequest::from_str_with_filename(&content, "<stdin>").unwrap_or_exit());
    }
    Ok(CodeGenRequest::from_file(path).unwrap_or_exit())
}

#[derive(Parser)]
#[command(name = "typesnip")]
#[command(version)]
#[command(about = "Generate model and query snippets from a query and its type graph")]
pub(crate) struct Cli {
    /// Log generation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Log to stderr, filtered by `RUST_LOG` or `--verbose`.
    pub fn init_tracing(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }

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
    /// Generate model and query snippets for a request
    Generate(GenerateCommand),

    /// Validate a request without generating snippets
    Check(CheckCommand),

    /// List registered target languages
    Languages(LanguagesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "typesnip", "generate", "request.json", "-l", "kotlin", "-l", "rust", "--format",
            "json", "-o", "out", "--force", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.languages, vec!["kotlin", "rust"]);
        assert_eq!(cmd.format, generate::Format::Json);
        assert!(cmd.force);
    }

    #[test]
    fn test_force_requires_output() {
        assert!(Cli::try_parse_from(["typesnip", "generate", "request.json", "--force"]).is_err());
    }
}
