//! JSON wire format of a code generation request.
//!
//! Producers send `null` for most absent collections and flags, so those
//! fields go through [`null_as_default`]. Unknown keys are ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::QualifiedName;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRequest {
    pub query: String,
    pub return_type: WireType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schema: WireSchema,
    #[serde(default, deserialize_with = "null_as_default")]
    pub anonymous_types: Vec<WireType>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireSchema {
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<WireType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<WireService>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireType {
    pub name: QualifiedName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: IndexMap<String, WireField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inherits_from: Vec<QualifiedName>,
    #[serde(default)]
    pub alias_for_type: Option<QualifiedName>,
    #[serde(default)]
    pub base_primitive_type_name: Option<QualifiedName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_primitive: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_scalar: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_collection: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_stream: bool,
    #[serde(default)]
    pub collection_type: Option<Box<WireType>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_parameters: Vec<QualifiedName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enum_values: Vec<WireEnumValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub format: Option<Patterns>,
    #[serde(default)]
    pub offset: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Vec<WireMetadata>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<WireSource>,
    #[serde(default)]
    pub type_doc: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireField {
    #[serde(rename = "type")]
    pub type_name: QualifiedName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nullable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Vec<WireMetadata>,
    #[serde(default)]
    pub format: Option<Patterns>,
    #[serde(default)]
    pub offset: Option<i32>,
    #[serde(default)]
    pub type_doc: Option<String>,
}

/// A format is usually a list of patterns, occasionally a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Patterns {
    One(String),
    Many(Vec<String>),
}

impl Patterns {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(pattern) => vec![pattern],
            Self::Many(patterns) => patterns,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireEnumValue {
    pub name: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub type_doc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMetadata {
    pub name: QualifiedName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSource {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireService {
    pub name: QualifiedName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operations: Vec<WireOperation>,
    #[serde(default)]
    pub type_doc: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireOperation {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<WireParameter>,
    pub return_type_name: QualifiedName,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireParameter {
    #[serde(default)]
    pub name: Option<String>,
    pub type_name: QualifiedName,
}
