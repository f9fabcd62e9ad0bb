use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use typesnip::{
    ops::{self, WriteOptions},
    reports::{Report, TerminalOutput},
};
use typesnip_codegen::GenerateOptions;
use typesnip_core::Config;

use super::read_request;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Request JSON file, or `-` to read stdin
    pub request: PathBuf,

    /// Target language (repeatable, defaults to the config's languages)
    #[arg(short, long = "language", value_name = "ID")]
    pub languages: Vec<String>,

    /// Path to typesnip.toml (defaults to ./typesnip.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write snippets to <DIR>/<language>/<label>.<ext> instead of printing them
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Overwrite existing snippet files
    #[arg(long, requires = "output")]
    pub force: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("failed to read current directory")?;
        let config = Config::load(self.config.as_deref(), &cwd)?;
        let request = read_request(&self.request)?;

        let languages = if self.languages.is_empty() {
            &config.generate.languages
        } else {
            &self.languages
        };
        let options = GenerateOptions {
            client: config.generate.client.clone(),
            docs: config.generate.docs,
        };
        let write = self.output.as_deref().map(|output_dir| WriteOptions {
            output_dir,
            force: self.force,
        });

        let report = ops::generate(&request, languages, &options, write)?;

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = serde_json::to_string_pretty(&report.to_json())
                    .wrap_err("failed to serialize snippets")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}
