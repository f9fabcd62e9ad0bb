//! TypeScript snippet target.

use typesnip_codegen::{
    builder::{CodeBuilder, StructureRenderer, TypeMapper},
    generation::ImportCollector,
    language::{LanguageCodegen, NamingConvention, QuerySnippet},
};

use crate::{
    naming::TS_NAMING, structure_renderer::TypeScriptStructureRenderer,
    type_mapper::TypeScriptTypeMapper,
};

/// Generates TypeScript interfaces and a typed `client.query` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTarget {
    type_mapper: TypeScriptTypeMapper,
    renderer: TypeScriptStructureRenderer,
}

impl TypeScriptTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Escape text for a template literal.
fn template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

impl LanguageCodegen for TypeScriptTarget {
    fn language(&self) -> &str {
        "typescript"
    }

    fn file_extension(&self) -> &str {
        "ts"
    }

    fn naming(&self) -> &NamingConvention {
        &TS_NAMING
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
        let mut code = CodeBuilder::typescript();
        for (module, symbols) in imports.iter() {
            if symbols.is_empty() {
                code.push_line(&format!("import '{module}';"));
                continue;
            }
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            code.push_line(&format!(
                "import {{ {} }} from '{module}';",
                symbols.join(", ")
            ));
        }
        code.build()
    }

    fn render_query(&self, snippet: &QuerySnippet<'_>) -> String {
        CodeBuilder::typescript()
            .line(&format!("const query = `{}`;", template_literal(snippet.query)))
            .blank()
            .line(&format!(
                "const result = {}.query<{}>(query);",
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
    fn test_render_query() {
        let query = TypeScriptTarget::new().render_query(&QuerySnippet {
            query: "find { Film[] }",
            return_type: &QualifiedName::new("films.Film"),
            result_type: "Film[]",
            client: "client",
        });
        insta::assert_snapshot!(query, @r"
        const query = `find { Film[] }`;

        const result = client.query<Film[]>(query);
        ");
    }

    #[test]
    fn test_query_is_escaped() {
        let query = TypeScriptTarget::new().render_query(&QuerySnippet {
            query: "find { Film(title == `${x}`) }",
            return_type: &QualifiedName::new("films.Film"),
            result_type: "Film",
            client: "vyne",
        });
        assert!(query.starts_with("const query = `find { Film(title == \\`\\${x}\\`) }`;\n"));
        assert!(query.contains("vyne.query<Film>(query)"));
    }

    #[test]
    fn test_render_imports() {
        let mut imports = ImportCollector::new();
        imports.add("rxjs", "Observable");
        imports.add("rxjs", "map");
        assert_eq!(
            TypeScriptTarget::new().render_imports(&imports),
            "import { Observable, map } from 'rxjs';\n"
        );
    }
}
