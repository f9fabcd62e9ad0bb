//! Registered targets.
//!
//! Maps language ids to their [`LanguageCodegen`] implementation. Ids with
//! no registered target are served by [`UnmappedTarget`].

use typesnip_codegen::{
    LanguageCodegen,
    language::{JsonTarget, SheetsTarget, UnmappedTarget},
};
use typesnip_codegen_kotlin::KotlinTarget;
use typesnip_codegen_rust::RustTarget;
use typesnip_codegen_typescript::TypeScriptTarget;

/// A language with a registered target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    TypeScript,
    Kotlin,
    Rust,
    Json,
    Sheets,
}

impl Language {
    /// Every registered language, in listing order.
    pub const ALL: [Language; 5] = [
        Language::TypeScript,
        Language::Kotlin,
        Language::Rust,
        Language::Json,
        Language::Sheets,
    ];

    /// The id used on the command line and in `typesnip.toml`.
    pub fn id(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::Kotlin => "kotlin",
            Language::Rust => "rust",
            Language::Json => "json",
            Language::Sheets => "sheets",
        }
    }

    /// Look up a language by id or file extension, ignoring case.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Some(Language::TypeScript),
            "kotlin" | "kt" => Some(Language::Kotlin),
            "rust" | "rs" => Some(Language::Rust),
            "json" => Some(Language::Json),
            "sheets" | "google-sheets" => Some(Language::Sheets),
            _ => None,
        }
    }

    pub fn target(&self) -> Box<dyn LanguageCodegen> {
        match self {
            Language::TypeScript => Box::new(TypeScriptTarget::new()),
            Language::Kotlin => Box::new(KotlinTarget::new()),
            Language::Rust => Box::new(RustTarget::new()),
            Language::Json => Box::new(JsonTarget::new()),
            Language::Sheets => Box::new(SheetsTarget::new()),
        }
    }
}

/// One target per registered language.
pub fn targets() -> Vec<Box<dyn LanguageCodegen>> {
    Language::ALL.iter().map(Language::target).collect()
}

/// The target for `id`, or an [`UnmappedTarget`] named after it.
pub fn target(id: &str) -> Box<dyn LanguageCodegen> {
    match Language::from_id(id) {
        Some(language) => language.target(),
        None => Box::new(UnmappedTarget::new(id)),
    }
}
