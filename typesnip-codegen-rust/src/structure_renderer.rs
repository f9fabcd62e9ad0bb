//! Rust implementation of StructureRenderer.
//!
//! Structs and enums derive `serde` traits. Members are renamed to
//! snake_case and variants to PascalCase; `#[serde(...)]` attributes keep
//! them bound to the wire names.

use indexmap::IndexSet;
use typesnip_codegen::builder::{
    EnumSpec, FieldSpec, StructSpec, StructureRenderer, TypeMapper, VariantSpec,
};
use typesnip_core::to_camel_case;

use crate::{
    naming::{RUST_NAMING, variant_name},
    type_mapper::RustTypeMapper,
};

const STRUCT_DERIVES: &str = "#[derive(Debug, Clone, Serialize, Deserialize)]\n";
const ENUM_DERIVES: &str =
    "#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]\n";
const REPR_ENUM_DERIVES: &str = "#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]\n";

/// Rust implementation of StructureRenderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustStructureRenderer {
    type_mapper: RustTypeMapper,
}

fn serde_rename(name: &str) -> String {
    format!("#[serde(rename = {name:?})]")
}

/// Field name without a raw identifier prefix, as serde sees it.
fn unraw(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

/// Identifiers that stay distinct after case conversion. A name already
/// taken gets the first free numeric suffix, joined by `separator`.
fn distinct(names: impl IntoIterator<Item = String>, separator: &str) -> Vec<String> {
    let mut taken = IndexSet::new();
    names
        .into_iter()
        .map(|name| {
            let mut candidate = name.clone();
            let mut suffix = 2;
            while taken.contains(&candidate) {
                candidate = format!("{}{separator}{suffix}", unraw(&name));
                suffix += 1;
            }
            taken.insert(candidate.clone());
            candidate
        })
        .collect()
}

impl RustStructureRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_docs(&self, docs: &[String], indent: &str) -> String {
        let mut result = String::new();
        for line in docs {
            result.push_str(indent);
            result.push_str("/// ");
            result.push_str(line);
            result.push('\n');
        }
        result
    }

    /// Member names of a struct's fields, in field order.
    fn member_names(spec: &StructSpec) -> Vec<String> {
        distinct(
            spec.fields.iter().map(|f| RUST_NAMING.member_name(&f.name)),
            "_",
        )
    }

    /// Whether `rename_all = "camelCase"` binds every field, with at
    /// least one that needs it.
    fn camel_case_fields(spec: &StructSpec, members: &[String]) -> bool {
        let mut renamed = false;
        for (field, member) in spec.fields.iter().zip(members) {
            let member = unraw(member);
            if member != field.name {
                renamed = true;
            }
            if to_camel_case(member) != field.name {
                return false;
            }
        }
        renamed
    }

    fn render_member(&self, spec: &FieldSpec, name: &str, rename: bool) -> String {
        let mut result = String::new();

        result.push_str(&self.render_docs(&spec.docs, "    "));
        if rename && unraw(name) != spec.name {
            result.push_str("    ");
            result.push_str(&serde_rename(&spec.name));
            result.push('\n');
        }

        result.push_str("    pub ");
        result.push_str(name);
        result.push_str(": ");
        result.push_str(&self.type_mapper.render_type(&spec.ty));
        result.push_str(",\n");
        result
    }

    fn render_constant(&self, spec: &VariantSpec, name: &str) -> String {
        let mut result = String::new();

        result.push_str(&self.render_docs(&spec.docs, "    "));
        let wire = match spec.string_value() {
            Some(value) => Some(value.to_string()),
            None if spec.value.is_i64() => None,
            None => Some(spec.value.to_string()),
        };
        if let Some(wire) = wire
            && wire != name
        {
            result.push_str("    ");
            result.push_str(&serde_rename(&wire));
            result.push('\n');
        }

        result.push_str("    ");
        result.push_str(name);
        if let Some(discriminant) = spec.value.as_i64() {
            result.push_str(&format!(" = {discriminant}"));
        }
        result.push_str(",\n");
        result
    }
}

impl StructureRenderer for RustStructureRenderer {
    fn render_struct(&self, spec: &StructSpec) -> String {
        let mut result = String::new();

        result.push_str(&self.render_docs(&spec.docs, ""));
        result.push_str(STRUCT_DERIVES);

        let members = Self::member_names(spec);
        let camel_case = Self::camel_case_fields(spec, &members);
        if camel_case {
            result.push_str("#[serde(rename_all = \"camelCase\")]\n");
        }

        result.push_str("pub struct ");
        result.push_str(&spec.name);
        if spec.fields.is_empty() {
            result.push_str(" {}\n");
            return result;
        }

        result.push_str(" {\n");
        for (field, member) in spec.fields.iter().zip(&members) {
            result.push_str(&self.render_member(field, member, !camel_case));
        }
        result.push_str("}\n");
        result
    }

    fn render_enum(&self, spec: &EnumSpec) -> String {
        let mut result = String::new();

        // Integer values are discriminants, serialized as numbers
        let repr = !spec.variants.is_empty() && spec.variants.iter().all(|v| v.value.is_i64());

        result.push_str(&self.render_docs(&spec.docs, ""));
        if repr {
            result.push_str(REPR_ENUM_DERIVES);
            result.push_str("#[repr(i64)]\n");
        } else {
            result.push_str(ENUM_DERIVES);
        }

        result.push_str("pub enum ");
        result.push_str(&spec.name);
        if spec.variants.is_empty() {
            result.push_str(" {}\n");
            return result;
        }

        result.push_str(" {\n");
        let names = distinct(spec.variants.iter().map(|v| variant_name(&v.name)), "");
        for (variant, name) in spec.variants.iter().zip(&names) {
            result.push_str(&self.render_constant(variant, name));
        }
        result.push_str("}\n");
        result
    }

    fn render_field(&self, spec: &FieldSpec) -> String {
        self.render_member(spec, &RUST_NAMING.member_name(&spec.name), true)
    }

    fn render_variant(&self, spec: &VariantSpec) -> String {
        self.render_constant(spec, &variant_name(&spec.name))
    }
}
