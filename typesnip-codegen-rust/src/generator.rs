//! Rust snippet target.

use typesnip_codegen::{
    builder::{CodeBuilder, StructureRenderer, TypeMapper},
    generation::ImportCollector,
    language::{LanguageCodegen, NamingConvention, QuerySnippet},
};

use crate::{
    naming::RUST_NAMING, structure_renderer::RustStructureRenderer, type_mapper::RustTypeMapper,
};

/// Generates `serde` structs and an awaited `client.query` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTarget {
    type_mapper: RustTypeMapper,
    renderer: RustStructureRenderer,
}

impl RustTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Quote text as a raw string literal with enough `#`s.
fn raw_string(text: &str) -> String {
    let mut longest = 0;
    for (i, _) in text.match_indices('"') {
        let run = text[i + 1..].chars().take_while(|c| *c == '#').count();
        longest = longest.max(run);
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

impl LanguageCodegen for RustTarget {
    fn language(&self) -> &str {
        "rust"
    }

    fn file_extension(&self) -> &str {
        "rs"
    }

    fn naming(&self) -> &NamingConvention {
        &RUST_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.type_mapper
    }

    fn structure_renderer(&self) -> &dyn StructureRenderer {
        &self.renderer
    }

    fn model_imports(&self, imports: &mut ImportCollector) {
        imports.add("serde", "Deserialize");
        imports.add("serde", "Serialize");
    }

    /// `use` lines, one per crate, sorted the way rustfmt sorts them.
    fn render_imports(&self, imports: &ImportCollector) -> String {
        let mut modules: Vec<_> = imports.iter().collect();
        modules.sort_by_key(|(module, _)| *module);

        let mut code = CodeBuilder::rust();
        for (module, symbols) in modules {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            match symbols.as_slice() {
                [] => code.push_line(&format!("use {module};")),
                [symbol] => code.push_line(&format!("use {module}::{symbol};")),
                symbols => code.push_line(&format!("use {module}::{{{}}};", symbols.join(", "))),
            };
        }
        code.build()
    }

    fn render_query(&self, snippet: &QuerySnippet<'_>) -> String {
        CodeBuilder::rust()
            .line(&format!("const QUERY: &str = {};", raw_string(snippet.query)))
            .blank()
            .line(&format!(
                "let result = {}.query::<{}>(QUERY).await?;",
                snippet.client, snippet.result_type
            ))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use typesnip_schema::QualifiedName;

    use super::*;

    #[test]
    fn test_raw_string() {
        assert_eq!(raw_string("find { Film[] }"), "r#\"find { Film[] }\"#");
        assert_eq!(
            raw_string(r##"find { Film(title == "#1") }"##),
            r###"r##"find { Film(title == "#1") }"##"###
        );
    }

    #[test]
    fn test_render_query() {
        let query = RustTarget::new().render_query(&QuerySnippet {
            query: "find { Film[] }",
            return_type: &QualifiedName::new("films.Film"),
            result_type: "Vec<Film>",
            client: "client",
        });
        insta::assert_snapshot!(query, @r##"
        const QUERY: &str = r#"find { Film[] }"#;

        let result = client.query::<Vec<Film>>(QUERY).await?;
        "##);
    }

    #[test]
    fn test_render_imports_sorted_and_grouped() {
        let mut imports = ImportCollector::new();
        RustTarget::new().model_imports(&mut imports);
        imports.add("rust_decimal", "Decimal");
        imports.add("chrono", "Utc");
        imports.add("chrono", "DateTime");
        insta::assert_snapshot!(RustTarget::new().render_imports(&imports), @r"
        use chrono::{DateTime, Utc};
        use rust_decimal::Decimal;
        use serde::{Deserialize, Serialize};
        ");
    }
}
