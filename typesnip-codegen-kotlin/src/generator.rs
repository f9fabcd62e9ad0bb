//! Kotlin snippet target.

use typesnip_codegen::{
    builder::{CodeBuilder, StructureRenderer, TypeMapper},
    generation::ImportCollector,
    language::{LanguageCodegen, NamingConvention, QuerySnippet},
};

use crate::{
    naming::KOTLIN_NAMING, structure_renderer::KotlinStructureRenderer,
    type_mapper::KotlinTypeMapper,
};

/// Generates Kotlin data classes and a typed `client.query` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTarget {
    type_mapper: KotlinTypeMapper,
    renderer: KotlinStructureRenderer,
}

impl KotlinTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Escape text for a raw (`"""`) string literal, which has no escapes.
fn raw_string(text: &str) -> String {
    text.replace('$', "${'$'}").replace("\"\"\"", "\"\"${'\"'}")
}

impl LanguageCodegen for KotlinTarget {
    fn language(&self) -> &str {
        "kotlin"
    }

    fn file_extension(&self) -> &str {
        "kt"
    }

    fn naming(&self) -> &NamingConvention {
        &KOTLIN_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.type_mapper
    }

    fn structure_renderer(&self) -> &dyn StructureRenderer {
        &self.renderer
    }

    fn recognised_annotations(&self) -> &[&'static str] {
        &["Id"]
    }

    fn render_imports(&self, imports: &ImportCollector) -> String {
        let mut code = CodeBuilder::rust();
        for (module, symbols) in imports.iter() {
            if symbols.is_empty() {
                code.push_line(&format!("import {module}.*"));
            }
            for symbol in symbols {
                code.push_line(&format!("import {module}.{symbol}"));
            }
        }
        code.build()
    }

    fn render_query(&self, snippet: &QuerySnippet<'_>) -> String {
        CodeBuilder::rust()
            .line(&format!("val query = \"\"\"{}\"\"\"", raw_string(snippet.query)))
            .blank()
            .line(&format!(
                "val result = {}.query<{}>(query)",
                snippet.client, snippet.result_type
            ))
            .build()
    }
}
