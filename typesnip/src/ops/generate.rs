//! Generate operation - snippets for every requested language.

use std::path::Path;

use eyre::Result;
use tracing::debug;
use typesnip_codegen::GenerateOptions;
use typesnip_core::{File, Overwrite, WriteResult};
use typesnip_schema::CodeGenRequest;

use crate::{
    language::target,
    reports::{GenerateReport, LanguageOutput, SnippetFile},
};

/// Where and how to write snippet files.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions<'a> {
    pub output_dir: &'a Path,
    /// Overwrite existing files.
    pub force: bool,
}

/// Execute the generate operation.
///
/// Generates every language in order. With `write`, each snippet is also
/// written to `<dir>/<language>/<label>.<ext>`.
pub fn generate(
    request: &CodeGenRequest,
    languages: &[String],
    options: &GenerateOptions,
    write: Option<WriteOptions<'_>>,
) -> Result<GenerateReport> {
    let mut report = GenerateReport::default();

    for language in languages {
        let target = target(language);
        let output = typesnip_codegen::generate(target.as_ref(), request, options);

        let mut files = Vec::new();
        if let Some(write) = write {
            let overwrite = if write.force {
                Overwrite::Always
            } else {
                Overwrite::IfMissing
            };
            for snippet in &output.snippets {
                let path = write
                    .output_dir
                    .join(target.language())
                    .join(format!("{}.{}", snippet.label, target.file_extension()));
                let result = File::new(&path, snippet.content.as_str())
                    .overwrite(overwrite)
                    .write()?;
                debug!(path = %path.display(), ?result, "wrote snippet");
                files.push(SnippetFile {
                    path,
                    written: result == WriteResult::Written,
                });
            }
        }

        report.languages.push(LanguageOutput {
            language: target.language().to_string(),
            snippets: output.snippets,
            diagnostics: output.diagnostics,
            files,
        });
    }

    Ok(report)
}
