//! Query-only target rendering the query as a JSON request body.

use serde_json::json;

use crate::{
    builder::{StructureRenderer, TypeMapper},
    generation::ImportCollector,
    language::{
        LanguageCodegen, NamingConvention, QuerySnippet,
        unmapped::{UNMAPPED_NAMING, UnmappedStructureRenderer, UnmappedTypeMapper},
    },
};

/// Posts the query over HTTP: `{ "query": ..., "returnType": ... }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTarget {
    type_mapper: UnmappedTypeMapper,
    renderer: UnmappedStructureRenderer,
}

impl JsonTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageCodegen for JsonTarget {
    fn language(&self) -> &str {
        "json"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn naming(&self) -> &NamingConvention {
        &UNMAPPED_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.type_mapper
    }

    fn structure_renderer(&self) -> &dyn StructureRenderer {
        &self.renderer
    }

    fn renders_model(&self) -> bool {
        false
    }

    fn render_imports(&self, _imports: &ImportCollector) -> String {
        String::new()
    }

    fn render_query(&self, snippet: &QuerySnippet<'_>) -> String {
        let body = json!({
            "query": snippet.query,
            "returnType": snippet.return_type.parameterized_name(),
        });
        let mut content = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
        content.push('\n');
        content
    }
}
