//! Query-only target rendering a spreadsheet `=discover(...)` formula.

use typesnip_schema::{PrimitiveKind, QualifiedName};

use crate::{
    builder::{StructureRenderer, TypeMapper},
    generation::ImportCollector,
    language::{
        LanguageCodegen, NamingConvention, QuerySnippet,
        unmapped::{UNMAPPED_NAMING, UnmappedStructureRenderer, UnmappedTypeMapper},
    },
};

/// Discovers the result type from a Google Sheets cell.
///
/// The formula names the type to discover, so the query text itself is not
/// part of the snippet. Streams cannot fill a cell and get a notice instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetsTarget {
    type_mapper: UnmappedTypeMapper,
    renderer: UnmappedStructureRenderer,
}

impl SheetsTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `films.Film[]` for an array of films, `None` for anything streamed.
fn discoverable(name: &QualifiedName) -> Option<String> {
    match (PrimitiveKind::from_name(name.fully_qualified_name()), name.parameters()) {
        (Some(PrimitiveKind::Stream), _) => None,
        (Some(PrimitiveKind::Array), [element]) => Some(format!("{}[]", discoverable(element)?)),
        _ => Some(name.parameterized_name()),
    }
}

impl LanguageCodegen for SheetsTarget {
    fn language(&self) -> &str {
        "sheets"
    }

    fn file_extension(&self) -> &str {
        "txt"
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
        match discoverable(snippet.return_type) {
            Some(name) => format!("=discover(\"{}\")\n", name.replace('"', "\"\"")),
            None => "Streaming queries are not supported in Google Sheets\n".to_string(),
        }
    }
}
