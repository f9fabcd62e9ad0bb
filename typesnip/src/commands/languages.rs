use clap::Args;
use eyre::Result;
use typesnip::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self) -> Result<()> {
        ops::languages().render(&mut TerminalOutput::new());
        Ok(())
    }
}
