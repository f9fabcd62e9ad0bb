//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod languages;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, LanguageOutput, SnippetFile};
pub use languages::{LanguageInfo, LanguagesReport};
pub use output::{CapturedOutput, Output, Report, TerminalOutput};
