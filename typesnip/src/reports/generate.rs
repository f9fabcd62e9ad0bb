//! Generate command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};
use typesnip_codegen::{
    GeneratedSnippet,
    generation::{Diagnostic, Severity},
};

use super::output::{Output, Report};

/// Snippets and diagnostics for every requested language.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub languages: Vec<LanguageOutput>,
}

/// Generation result for one language.
#[derive(Debug)]
pub struct LanguageOutput {
    pub language: String,
    pub snippets: Vec<GeneratedSnippet>,
    pub diagnostics: Vec<Diagnostic>,
    /// Files written for `--output`, empty otherwise.
    pub files: Vec<SnippetFile>,
}

/// A snippet file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetFile {
    pub path: PathBuf,
    /// False when an existing file was kept.
    pub written: bool,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    language: &'a str,
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
}

impl GenerateReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics().any(|(_, d)| d.severity.is_error())
    }

    /// Every snippet, languages in request order.
    pub fn snippets(&self) -> impl Iterator<Item = &GeneratedSnippet> {
        self.languages.iter().flat_map(|l| l.snippets.iter())
    }

    fn diagnostics(&self) -> impl Iterator<Item = (&str, &Diagnostic)> {
        self.languages
            .iter()
            .flat_map(|l| l.diagnostics.iter().map(|d| (l.language.as_str(), d)))
    }

    /// The `--format json` document.
    pub fn to_json(&self) -> Value {
        let diagnostics: Vec<JsonDiagnostic<'_>> = self
            .diagnostics()
            .map(|(language, diagnostic)| JsonDiagnostic {
                language,
                diagnostic,
            })
            .collect();
        let files: Vec<&SnippetFile> = self.languages.iter().flat_map(|l| &l.files).collect();
        let mut document = json!({
            "snippets": self.snippets().collect::<Vec<_>>(),
            "diagnostics": diagnostics,
        });
        if !files.is_empty() {
            document["files"] = json!(files);
        }
        document
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for (language, diagnostic) in self.diagnostics() {
            let message = match &diagnostic.location {
                Some(location) => format!("[{}] {} (at {})", language, diagnostic.message, location),
                None => format!("[{}] {}", language, diagnostic.message),
            };
            match diagnostic.severity {
                Severity::Error => out.error(&message),
                Severity::Warning => out.warning(&message),
                Severity::Info => {}
            }
        }

        let files: Vec<&SnippetFile> = self.languages.iter().flat_map(|l| &l.files).collect();
        if !files.is_empty() {
            out.section("Snippets");
            for file in files {
                let path = file.path.display().to_string();
                if file.written {
                    out.added_item(&path);
                } else {
                    out.list_item(&format!("{} (exists, use --force to overwrite)", path));
                }
            }
            return;
        }

        let mut first = true;
        for snippet in self.snippets() {
            if !first {
                out.newline();
            }
            first = false;
            out.divider(&format!("{}/{}", snippet.language, snippet.label));
            out.preformatted(snippet.content.trim_end());
        }
    }
}
