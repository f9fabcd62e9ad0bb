//! Kotlin implementation of StructureRenderer.
//!
//! # Kotlin Mapping
//!
//! - `StructSpec` → `data class` with `val` constructor properties
//!   (a plain `class` when there are no fields)
//! - `EnumSpec` → `enum class`, with a `value` property when the wire
//!   values differ from the constant names

use typesnip_codegen::builder::{
    CodeBuilder, EnumSpec, FieldSpec, StructSpec, StructureRenderer, TypeMapper, VariantSpec,
};

use crate::{naming::KOTLIN_NAMING, type_mapper::KotlinTypeMapper};

/// Renders declarations as Kotlin data classes and enum classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinStructureRenderer {
    type_mapper: KotlinTypeMapper,
}

/// How an enum's wire values are carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnumValues {
    /// Every value is the constant's own name.
    Names,
    Int,
    /// An integer outside the `Int` range.
    Long,
    String,
}

fn kotlin_string(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$");
    format!("\"{escaped}\"")
}

impl KotlinStructureRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn enum_values(spec: &EnumSpec) -> EnumValues {
        if spec
            .variants
            .iter()
            .all(|v| v.string_value() == Some(v.name.as_str()))
        {
            EnumValues::Names
        } else if spec
            .variants
            .iter()
            .all(|v| v.value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()))
        {
            EnumValues::Int
        } else if spec.variants.iter().all(|v| v.value.is_i64()) {
            EnumValues::Long
        } else {
            EnumValues::String
        }
    }

    fn render_constant(&self, spec: &VariantSpec, values: EnumValues) -> String {
        let name = KOTLIN_NAMING.member_name(&spec.name);
        let constant = match values {
            EnumValues::Names => format!("{name},"),
            EnumValues::Int | EnumValues::Long => format!("{name}({}),", spec.value),
            EnumValues::String => match spec.string_value() {
                Some(value) => format!("{name}({}),", kotlin_string(value)),
                None => format!("{name}({}),", kotlin_string(&spec.value.to_string())),
            },
        };
        CodeBuilder::rust()
            .indent()
            .jsdoc(&spec.docs)
            .line(&constant)
            .build()
    }
}

impl StructureRenderer for KotlinStructureRenderer {
    fn render_struct(&self, spec: &StructSpec) -> String {
        let code = CodeBuilder::rust().jsdoc(&spec.docs);
        if !spec.has_fields() {
            return code.line(&format!("class {}", spec.name)).build();
        }
        code.block_with_close(&format!("data class {}(", spec.name), ")", |b| {
            b.each(&spec.fields, |b, field| b.raw(&self.render_field(field)))
        })
        .build()
    }

    fn render_enum(&self, spec: &EnumSpec) -> String {
        let code = CodeBuilder::rust().jsdoc(&spec.docs);
        if spec.variants.is_empty() {
            return code.line(&format!("enum class {}", spec.name)).build();
        }

        let values = Self::enum_values(spec);
        let header = match values {
            EnumValues::Names => format!("enum class {} {{", spec.name),
            EnumValues::Int => format!("enum class {}(val value: Int) {{", spec.name),
            EnumValues::Long => format!("enum class {}(val value: Long) {{", spec.name),
            EnumValues::String => format!("enum class {}(val value: String) {{", spec.name),
        };
        code.block_with_close(&header, "}", |b| {
            b.each(&spec.variants, |b, variant| {
                b.raw(&self.render_constant(variant, values))
            })
        })
        .build()
    }

    /// Render a field as a constructor property.
    fn render_field(&self, spec: &FieldSpec) -> String {
        CodeBuilder::rust()
            .indent()
            .jsdoc(&spec.docs)
            .line(&format!(
                "val {}: {},",
                KOTLIN_NAMING.member_name(&spec.name),
                self.type_mapper.render_type(&spec.ty)
            ))
            .build()
    }

    fn render_variant(&self, spec: &VariantSpec) -> String {
        let values = if spec.string_value() == Some(spec.name.as_str()) {
            EnumValues::Names
        } else {
            EnumValues::String
        };
        self.render_constant(spec, values)
    }
}
