//! TypeScript implementation of StructureRenderer.
//!
//! # TypeScript Mapping
//!
//! - `StructSpec` → `export interface`, nullable members as `name?: T`
//! - `EnumSpec` → `export type` union of the variants' literal values

use typesnip_codegen::builder::{
    CodeBuilder, EnumSpec, FieldSpec, StructSpec, StructureRenderer, TypeMapper, TypeRef,
    VariantSpec,
};

use crate::{naming::TS_NAMING, type_mapper::TypeScriptTypeMapper};

/// Renders declarations as TypeScript interfaces and literal unions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptStructureRenderer {
    type_mapper: TypeScriptTypeMapper,
}

impl TypeScriptStructureRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A variant's value as a TypeScript literal type.
    fn literal(&self, spec: &VariantSpec) -> String {
        match spec.string_value() {
            Some(value) => format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'")),
            None => spec.value.to_string(),
        }
    }
}

impl StructureRenderer for TypeScriptStructureRenderer {
    /// Render a struct as an exported TypeScript interface.
    fn render_struct(&self, spec: &StructSpec) -> String {
        let code = CodeBuilder::typescript().jsdoc(&spec.docs);
        if !spec.has_fields() {
            return code
                .line(&format!("export interface {} {{}}", spec.name))
                .build();
        }
        code.block_with_close(&format!("export interface {} {{", spec.name), "}", |b| {
            b.each(&spec.fields, |b, field| b.raw(&self.render_field(field)))
        })
        .build()
    }

    /// Render an enum as a union of literal types.
    ///
    /// Short unions stay on one line; documented variants put every member
    /// on its own line.
    fn render_enum(&self, spec: &EnumSpec) -> String {
        let code = CodeBuilder::typescript().jsdoc(&spec.docs);
        if spec.variants.is_empty() {
            return code
                .line(&format!("export type {} = never;", spec.name))
                .build();
        }

        if spec.variants.iter().all(|v| v.docs.is_empty()) {
            let literals: Vec<String> = spec.variants.iter().map(|v| self.literal(v)).collect();
            return code
                .line(&format!(
                    "export type {} = {};",
                    spec.name,
                    literals.join(" | ")
                ))
                .build();
        }

        let mut code = code.line(&format!("export type {} =", spec.name));
        let last = spec.variants.len() - 1;
        for (i, variant) in spec.variants.iter().enumerate() {
            let mut member = self.render_variant(variant);
            if i == last {
                member.pop();
                member.push_str(";\n");
            }
            code.push_raw(&member);
        }
        code.build()
    }

    /// Render a field as an interface property.
    fn render_field(&self, spec: &FieldSpec) -> String {
        let name = TS_NAMING.member_name(&spec.name);
        let (marker, ty) = match &spec.ty {
            TypeRef::Optional(inner) => ("?", self.type_mapper.render_type(inner)),
            ty => ("", self.type_mapper.render_type(ty)),
        };
        CodeBuilder::typescript()
            .indent()
            .jsdoc(&spec.docs)
            .line(&format!("{name}{marker}: {ty};"))
            .build()
    }

    /// Render a variant as one member of a multi-line union.
    fn render_variant(&self, spec: &VariantSpec) -> String {
        CodeBuilder::typescript()
            .indent()
            .jsdoc(&spec.docs)
            .line(&format!("| {}", self.literal(spec)))
            .build()
    }
}
