//! Lowered, immutable schema types.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{PrimitiveKind, QualifiedName};

/// Source names that mark a type as synthesized for one query.
const ANONYMOUS_SOURCE: &str = "UnknownSource";
const ANONYMOUS_PREFIXES: [&str; 2] = ["AnonymousProjectedType", "AnonymousType"];

/// A schema type.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub name: QualifiedName,
    pub kind: TypeKind,
    pub format: Option<FormatSpec>,
    pub metadata: Vec<Metadata>,
    pub sources: Vec<Source>,
    pub doc: Option<String>,
}

/// What a type is, decided once when the request is lowered.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// A built-in such as `lang.taxi.Int`.
    Primitive(PrimitiveKind),
    /// A semantic type whose primitive is found by following `parents`.
    Scalar { parents: Vec<QualifiedName> },
    Enum(Vec<EnumValue>),
    /// An object type; attributes keep declaration order.
    Record(IndexMap<String, Field>),
    Collection(QualifiedName),
    Stream(QualifiedName),
}

/// A record attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub type_name: QualifiedName,
    pub nullable: bool,
    pub metadata: Vec<Metadata>,
    /// Overrides the format declared on the field's type.
    pub format: Option<FormatSpec>,
    pub doc: Option<String>,
}

/// One enum member.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    /// The literal as it appears in data. Defaults to the name.
    pub value: Value,
    pub synonyms: Vec<String>,
    pub doc: Option<String>,
}

/// Declared date/time patterns with an optional UTC offset in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub patterns: Vec<String>,
    pub offset: Option<i32>,
}

/// An annotation such as `@Id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub name: QualifiedName,
    pub params: IndexMap<String, Value>,
}

/// Where a type was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub version: Option<String>,
}

/// A declared service. Carried for summaries, never used to generate code.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: QualifiedName,
    pub operations: Vec<Operation>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: QualifiedName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Option<String>,
    pub type_name: QualifiedName,
}

impl Type {
    pub fn new(name: QualifiedName, kind: TypeKind) -> Self {
        Self {
            name,
            kind,
            format: None,
            metadata: Vec::new(),
            sources: Vec::new(),
            doc: None,
        }
    }

    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(
            QualifiedName::new(format!("lang.taxi.{kind}")),
            TypeKind::Primitive(kind),
        )
    }

    pub fn scalar(name: &str, parents: &[&str]) -> Self {
        Self::new(
            QualifiedName::new(name),
            TypeKind::Scalar {
                parents: parents.iter().map(|p| QualifiedName::new(*p)).collect(),
            },
        )
    }

    /// A record with the given attributes, in order.
    pub fn record(name: &str, fields: impl IntoIterator<Item = (&'static str, Field)>) -> Self {
        Self::new(
            QualifiedName::new(name),
            TypeKind::Record(
                fields
                    .into_iter()
                    .map(|(name, field)| (name.to_string(), field))
                    .collect(),
            ),
        )
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata.push(metadata);
        self
    }

    pub fn with_source(mut self, name: impl Into<String>) -> Self {
        self.sources.push(Source {
            name: name.into(),
            version: None,
        });
        self
    }

    /// Attributes of a record, in declaration order. Empty for everything
    /// else.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Field)> {
        let fields = match &self.kind {
            TypeKind::Record(fields) => Some(fields),
            _ => None,
        };
        fields
            .into_iter()
            .flat_map(|fields| fields.iter().map(|(name, field)| (name.as_str(), field)))
    }

    /// Parents followed to find the primitive. Empty unless scalar.
    pub fn parents(&self) -> &[QualifiedName] {
        match &self.kind {
            TypeKind::Scalar { parents } => parents,
            _ => &[],
        }
    }

    /// Whether the type was synthesized for a single query's projection.
    pub fn is_anonymous(&self) -> bool {
        if self.sources.iter().any(|s| s.name == ANONYMOUS_SOURCE) {
            return true;
        }
        self.sources.is_empty()
            && ANONYMOUS_PREFIXES
                .iter()
                .any(|prefix| self.name.name().starts_with(prefix))
    }
}

impl Field {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: QualifiedName::new(type_name),
            nullable: false,
            metadata: Vec::new(),
            format: None,
            doc: None,
        }
    }

    /// A field whose type name may be parameterized, like
    /// `lang.taxi.Array<films.Film>`.
    pub fn of(type_name: QualifiedName) -> Self {
        Self {
            type_name,
            ..Self::new("")
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata.push(metadata);
        self
    }

    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn has_metadata(&self, name: &str) -> bool {
        self.metadata.iter().any(|m| m.is(name))
    }
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: Value::String(name.clone()),
            name,
            synonyms: Vec::new(),
            doc: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn is_integer(&self) -> bool {
        self.value.is_i64() || self.value.is_u64()
    }
}

impl FormatSpec {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            patterns: vec![pattern.into()],
            offset: None,
        }
    }

    pub fn with_offset(mut self, minutes: i32) -> Self {
        self.offset = Some(minutes);
        self
    }
}

impl Metadata {
    pub fn new(name: &str) -> Self {
        Self {
            name: QualifiedName::new(name),
            params: IndexMap::new(),
        }
    }

    /// Match on the short name, in any namespace.
    pub fn is(&self, name: &str) -> bool {
        self.name.name() == name
    }
}
