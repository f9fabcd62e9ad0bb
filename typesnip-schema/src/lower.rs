//! Lowering of wire types into [`Type`] with a closed [`TypeKind`].

use crate::{
    EnumValue, Field, FormatSpec, Metadata, Operation, Parameter, PrimitiveKind, QualifiedName,
    Service, Source, Type, TypeKind,
    wire::{Patterns, WireField, WireMetadata, WireService, WireType},
};

fn format_spec(patterns: Option<Patterns>, offset: Option<i32>) -> Option<FormatSpec> {
    let patterns = patterns.map(Patterns::into_vec).unwrap_or_default();
    if patterns.is_empty() && offset.is_none() {
        return None;
    }
    Some(FormatSpec { patterns, offset })
}

fn metadata(wire: Vec<WireMetadata>) -> Vec<Metadata> {
    wire.into_iter()
        .map(|m| Metadata {
            name: m.name,
            params: m.params,
        })
        .collect()
}

impl WireField {
    fn lower(self) -> Field {
        Field {
            type_name: self.type_name,
            nullable: self.nullable,
            metadata: metadata(self.metadata),
            format: format_spec(self.format, self.offset),
            doc: self.type_doc,
        }
    }
}

impl WireType {
    /// Lower this type. Element types carried inline as `collectionType`
    /// are pushed to `nested` so they can be registered after the catalog.
    pub(crate) fn lower(self, nested: &mut Vec<WireType>) -> Type {
        let builtin = PrimitiveKind::from_name(self.name.fully_qualified_name());
        let has_modifier = |m: &str| self.modifiers.iter().any(|x| x == m);
        let is_enum = !self.enum_values.is_empty() || has_modifier("ENUM");

        let element = self
            .collection_type
            .as_ref()
            .map(|c| c.name.clone())
            .or_else(|| self.type_parameters.first().cloned())
            .or_else(|| self.name.parameters().first().cloned())
            .unwrap_or_else(|| QualifiedName::new("lang.taxi.Any"));

        let kind = if is_enum {
            TypeKind::Enum(
                self.enum_values
                    .into_iter()
                    .map(|v| EnumValue {
                        value: v
                            .value
                            .filter(|value| !value.is_null())
                            .unwrap_or_else(|| v.name.clone().into()),
                        name: v.name,
                        synonyms: v.synonyms,
                        doc: v.type_doc,
                    })
                    .collect(),
            )
        } else if self.is_stream || builtin == Some(PrimitiveKind::Stream) {
            TypeKind::Stream(element)
        } else if self.is_collection || builtin == Some(PrimitiveKind::Array) {
            TypeKind::Collection(element)
        } else if let Some(kind) = builtin {
            TypeKind::Primitive(kind)
        } else if !self.attributes.is_empty() {
            TypeKind::Record(
                self.attributes
                    .into_iter()
                    .map(|(name, field)| (name, field.lower()))
                    .collect(),
            )
        } else if self.is_scalar
            || self.is_primitive
            || !self.inherits_from.is_empty()
            || self.alias_for_type.is_some()
            || self.base_primitive_type_name.is_some()
        {
            let mut parents: Vec<QualifiedName> = self.alias_for_type.into_iter().collect();
            parents.extend(self.inherits_from);
            // The declared base primitive is the last resort when no
            // declared parent resolves
            if let Some(base) = self.base_primitive_type_name
                && !parents.contains(&base)
            {
                parents.push(base);
            }
            TypeKind::Scalar { parents }
        } else {
            TypeKind::Record(Default::default())
        };

        if let Some(collection_type) = self.collection_type {
            nested.push(*collection_type);
        }

        Type {
            name: self.name,
            kind,
            format: format_spec(self.format, self.offset),
            metadata: metadata(self.metadata),
            sources: self
                .sources
                .into_iter()
                .map(|s| Source {
                    name: s.name,
                    version: s.version,
                })
                .collect(),
            doc: self.type_doc,
        }
    }
}

impl WireService {
    pub(crate) fn lower(self) -> Service {
        Service {
            name: self.name,
            operations: self
                .operations
                .into_iter()
                .map(|op| Operation {
                    name: op.name,
                    parameters: op
                        .parameters
                        .into_iter()
                        .map(|p| Parameter {
                            name: p.name,
                            type_name: p.type_name,
                        })
                        .collect(),
                    return_type: op.return_type_name,
                })
                .collect(),
            doc: self.type_doc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(json: &str) -> (Type, Vec<WireType>) {
        let wire: WireType = serde_json::from_str(json).unwrap();
        let mut nested = Vec::new();
        let ty = wire.lower(&mut nested);
        (ty, nested)
    }

    #[test]
    fn test_builtin_is_primitive() {
        let (ty, _) = lower(r#"{ "name": "lang.taxi.Int", "isPrimitive": true, "isScalar": true }"#);
        assert_eq!(ty.kind, TypeKind::Primitive(PrimitiveKind::Int));
    }

    #[test]
    fn test_scalar_parents_with_alias_first_and_base_last() {
        let (ty, _) = lower(
            r#"{
                "name": "films.FilmId",
                "isScalar": true,
                "aliasForType": "films.Id",
                "inheritsFrom": ["films.NumericId"],
                "basePrimitiveTypeName": { "fullyQualifiedName": "lang.taxi.Int" }
            }"#,
        );
        let parents: Vec<String> = ty.parents().iter().map(|p| p.to_string()).collect();
        assert_eq!(parents, vec!["films.Id", "films.NumericId", "lang.taxi.Int"]);
    }

    #[test]
    fn test_enum_wins_over_other_flags() {
        let (ty, _) = lower(
            r#"{
                "name": "films.Genre",
                "isScalar": true,
                "inheritsFrom": ["lang.taxi.String"],
                "enumValues": [
                    { "name": "Action", "value": "action", "synonyms": [], "typeDoc": null },
                    { "name": "Drama", "value": null }
                ]
            }"#,
        );
        let TypeKind::Enum(values) = &ty.kind else {
            panic!("expected enum, got {:?}", ty.kind);
        };
        assert_eq!(values[0].value, "action");
        assert_eq!(values[1].value, "Drama");
    }

    #[test]
    fn test_collection_element_sources() {
        let (ty, nested) = lower(
            r#"{
                "name": "lang.taxi.Array<films.Film>",
                "isCollection": true,
                "collectionType": { "name": "films.Film", "attributes": { "title": { "type": "films.Title" } } }
            }"#,
        );
        assert_eq!(ty.kind, TypeKind::Collection(QualifiedName::new("films.Film")));
        assert_eq!(nested.len(), 1);

        let (ty, nested) = lower(r#"{ "name": "lang.taxi.Array<films.Film>" }"#);
        assert_eq!(ty.kind, TypeKind::Collection(QualifiedName::new("films.Film")));
        assert!(nested.is_empty());

        let (ty, _) = lower(
            r#"{ "name": "films.FilmStream", "isStream": true, "typeParameters": ["films.Film"] }"#,
        );
        assert_eq!(ty.kind, TypeKind::Stream(QualifiedName::new("films.Film")));
    }

    #[test]
    fn test_record_keeps_attribute_order_and_nulls() {
        let (ty, _) = lower(
            r#"{
                "name": "films.Film",
                "attributes": {
                    "title": { "type": "films.Title", "nullable": null, "metadata": null },
                    "releaseDate": { "type": "films.ReleaseDate", "nullable": true, "format": "dd/MM/yyyy" }
                },
                "sources": [{ "name": "films.taxi", "version": "0.1.0" }],
                "typeDoc": "A film"
            }"#,
        );
        let fields: Vec<(&str, bool)> = ty.attributes().map(|(n, f)| (n, f.nullable)).collect();
        assert_eq!(fields, vec![("title", false), ("releaseDate", true)]);
        let (_, release) = ty.attributes().nth(1).unwrap();
        assert_eq!(release.format, Some(FormatSpec::new("dd/MM/yyyy")));
        assert_eq!(ty.doc.as_deref(), Some("A film"));
        assert!(!ty.is_anonymous());
    }

    #[test]
    fn test_empty_type_is_empty_record() {
        let (ty, _) = lower(r#"{ "name": "AnonymousProjectedTypeAbc", "sources": [] }"#);
        assert_eq!(ty.kind, TypeKind::Record(Default::default()));
        assert!(ty.is_anonymous());
    }
}
