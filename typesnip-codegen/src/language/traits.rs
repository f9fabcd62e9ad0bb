//! Language-agnostic code generation traits.

use typesnip_schema::QualifiedName;

use crate::{
    builder::{StructureRenderer, TypeMapper},
    generation::ImportCollector,
    language::NamingConvention,
};

/// What a query snippet needs to know.
#[derive(Debug, Clone, Copy)]
pub struct QuerySnippet<'a> {
    /// Query text, verbatim.
    pub query: &'a str,
    /// The result type as the schema names it.
    pub return_type: &'a QualifiedName,
    /// The result type, already rendered (e.g., `Film[]`).
    pub result_type: &'a str,
    /// Identifier of the client the call expression uses.
    pub client: &'a str,
}

/// A target language.
///
/// Traversal and planning are shared; a target only says how types,
/// declarations and the query call look in its syntax.
pub trait LanguageCodegen: Send + Sync {
    /// Language identifier (e.g., "typescript", "kotlin", "rust")
    fn language(&self) -> &str;

    /// File extension for written snippets (e.g., "ts", "kt", "rs")
    fn file_extension(&self) -> &str;

    fn naming(&self) -> &NamingConvention;

    fn type_mapper(&self) -> &dyn TypeMapper;

    fn structure_renderer(&self) -> &dyn StructureRenderer;

    /// Whether the target declares the result's types. Query-only targets
    /// get the query snippet alone, without type resolution.
    fn renders_model(&self) -> bool {
        true
    }

    /// Metadata names surfaced as doc tags (e.g., `Id` becomes `@id`).
    ///
    /// Metadata is ignored unless a target opts in here.
    fn recognised_annotations(&self) -> &[&'static str] {
        &[]
    }

    /// Imports every non-empty model snippet needs.
    fn model_imports(&self, _imports: &mut ImportCollector) {}

    /// Render the import block of the model snippet.
    fn render_imports(&self, imports: &ImportCollector) -> String;

    /// Render the query snippet: the query plus a call producing the result.
    fn render_query(&self, snippet: &QuerySnippet<'_>) -> String;

    /// A full-line comment, used for placeholders.
    fn line_comment(&self, text: &str) -> String {
        format!("// {text}")
    }
}
