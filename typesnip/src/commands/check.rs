use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typesnip::{
    ops,
    reports::{Report, TerminalOutput},
};

use super::read_request;

#[derive(Args)]
pub struct CheckCommand {
    /// Request JSON file, or `-` to read stdin
    pub request: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let request = read_request(&self.request)?;
        let report = ops::check(&request, &self.request.display().to_string());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
