//! Fallback target for language ids with no registered implementation.
//!
//! Renders a neutral `type Name { field: T }` syntax. Its mapper knows no
//! primitive, so every primitive ends up as a placeholder and an inline
//! fallback instead of a failure.

use typesnip_core::to_pascal_case;
use typesnip_schema::PrimitiveKind;

use crate::{
    builder::{
        CodeBuilder, EnumSpec, FieldSpec, StructSpec, StructureRenderer, TypeMapper, TypeRef,
        VariantSpec,
    },
    generation::ImportCollector,
    language::{LanguageCodegen, NamingConvention, QuerySnippet},
};

fn verbatim(name: &str) -> String {
    name.to_string()
}

fn quote(name: &str) -> String {
    format!("\"{name}\"")
}

pub(crate) const UNMAPPED_NAMING: NamingConvention = NamingConvention {
    type_case: to_pascal_case,
    member_case: verbatim,
    reserved_words: &[],
    reserved_members_allowed: true,
    escape_member: quote,
};

/// Type mapper without primitive mappings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnmappedTypeMapper;

impl TypeMapper for UnmappedTypeMapper {
    fn map_primitive(&self, _kind: PrimitiveKind) -> Option<&'static str> {
        None
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("{inner}?")
    }

    fn map_array(&self, inner: &str) -> String {
        format!("{inner}[]")
    }

    fn map_stream(&self, inner: &str) -> String {
        format!("Stream<{inner}>")
    }

    fn untyped(&self) -> &'static str {
        "any"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnmappedStructureRenderer {
    type_mapper: UnmappedTypeMapper,
}

impl StructureRenderer for UnmappedStructureRenderer {
    fn render_struct(&self, spec: &StructSpec) -> String {
        let code = CodeBuilder::typescript().jsdoc(&spec.docs);
        if !spec.has_fields() {
            return code.line(&format!("type {} {{}}", spec.name)).build();
        }
        code.block_with_close(&format!("type {} {{", spec.name), "}", |b| {
            b.each(&spec.fields, |b, field| b.raw(&self.render_field(field)))
        })
        .build()
    }

    fn render_enum(&self, spec: &EnumSpec) -> String {
        let variants: Vec<String> = spec
            .variants
            .iter()
            .map(|v| self.render_variant(v))
            .collect();
        CodeBuilder::typescript()
            .jsdoc(&spec.docs)
            .line(&format!("enum {} {{ {} }}", spec.name, variants.join(", ")))
            .build()
    }

    fn render_field(&self, spec: &FieldSpec) -> String {
        let name = UNMAPPED_NAMING.member_name(&spec.name);
        let (marker, ty) = match &spec.ty {
            TypeRef::Optional(inner) => ("?", self.type_mapper.render_type(inner)),
            ty => ("", self.type_mapper.render_type(ty)),
        };
        CodeBuilder::typescript()
            .indent()
            .jsdoc(&spec.docs)
            .line(&format!("{name}{marker}: {ty}"))
            .build()
    }

    fn render_variant(&self, spec: &VariantSpec) -> String {
        spec.name.clone()
    }
}

/// Serves any language id that has no registered target.
#[derive(Debug, Clone)]
pub struct UnmappedTarget {
    language: String,
    type_mapper: UnmappedTypeMapper,
    renderer: UnmappedStructureRenderer,
}

impl UnmappedTarget {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            type_mapper: UnmappedTypeMapper,
            renderer: UnmappedStructureRenderer::default(),
        }
    }
}

impl LanguageCodegen for UnmappedTarget {
    fn language(&self) -> &str {
        &self.language
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

    fn render_imports(&self, imports: &ImportCollector) -> String {
        let mut code = CodeBuilder::typescript();
        for (module, symbols) in imports.iter() {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            code.push_line(&format!("import {module}.{{{}}}", symbols.join(", ")));
        }
        code.build()
    }

    fn render_query(&self, snippet: &QuerySnippet<'_>) -> String {
        let mut code = CodeBuilder::typescript();
        code.push_line(&self.line_comment(&format!("Result: {}", snippet.result_type)))
            .push_lines(snippet.query);
        code.build()
    }
}
