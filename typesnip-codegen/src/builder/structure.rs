//! Language-agnostic structure definitions.
//!
//! The generator describes each declaration as a [`StructSpec`] or
//! [`EnumSpec`]; a [`StructureRenderer`] turns it into target syntax.
//! Member names are kept exactly as the schema spells them. Renderers apply
//! their own naming rules and add rename attributes where the language
//! needs them.

use serde_json::Value;

use super::types::TypeRef;

/// A declarative specification for a record declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSpec {
    /// Declaration name, already unique within the snippet.
    pub name: String,
    /// Documentation lines.
    pub docs: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl StructSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a documentation line.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }

    /// Add several documentation lines.
    pub fn docs(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.docs.extend(lines);
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// A field in a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Attribute name as declared in the schema.
    pub name: String,
    /// Field type. Nullable fields carry [`TypeRef::Optional`].
    pub ty: TypeRef,
    /// Documentation lines.
    pub docs: Vec<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            docs: Vec::new(),
        }
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }

    pub fn docs(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.docs.extend(lines);
        self
    }
}

/// A declarative specification for an enum.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSpec {
    pub name: String,
    pub docs: Vec<String>,
    /// Variants in declared order.
    pub variants: Vec<VariantSpec>,
}

impl EnumSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }

    pub fn docs(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.docs.extend(lines);
        self
    }

    pub fn variant(mut self, variant: VariantSpec) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = VariantSpec>) -> Self {
        self.variants.extend(variants);
        self
    }
}

/// An enum member: a name and the literal it stands for on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSpec {
    pub name: String,
    pub value: Value,
    pub docs: Vec<String>,
}

impl VariantSpec {
    /// A variant whose value is its own name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: Value::String(name.clone()),
            name,
            docs: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }

    /// The value when it is a string.
    pub fn string_value(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Renders structure specs to language-specific code.
///
/// Every method returns complete lines ending in a newline.
pub trait StructureRenderer: Send + Sync {
    /// Render a record declaration.
    fn render_struct(&self, spec: &StructSpec) -> String;

    /// Render an enum declaration.
    fn render_enum(&self, spec: &EnumSpec) -> String;

    /// Render one field of a record, indented for the record body.
    fn render_field(&self, spec: &FieldSpec) -> String;

    /// Render one enum variant, indented for the enum body.
    fn render_variant(&self, spec: &VariantSpec) -> String;
}
