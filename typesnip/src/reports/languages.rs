//! Languages command report data structures.

use typesnip_schema::PrimitiveKind;

use super::output::{Output, Report};

/// Registered targets and what they map.
#[derive(Debug)]
pub struct LanguagesReport {
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug)]
pub struct LanguageInfo {
    pub id: String,
    pub extension: String,
    /// Renders the query snippet alone.
    pub query_only: bool,
    /// Primitive kinds with a built-in mapping.
    pub mapped: Vec<PrimitiveKind>,
}

impl Report for LanguagesReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Languages");
        for language in &self.languages {
            if language.query_only {
                out.list_item(&format!("{} (.{}), query only", language.id, language.extension));
                continue;
            }
            out.list_item(&format!(
                "{} (.{}), {} of {} primitives mapped",
                language.id,
                language.extension,
                language.mapped.len(),
                PrimitiveKind::SCALARS.len()
            ));
        }
        out.newline();
        out.preformatted("Other ids are generated with untyped placeholders.");
    }
}
