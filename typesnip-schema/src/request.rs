//! Request parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Error, QualifiedName, Result, TypeGraph, error::SourceContext, wire::WireRequest,
};

/// A query plus the type graph describing its result.
#[derive(Debug, Clone)]
pub struct CodeGenRequest {
    pub query: String,
    pub return_type: QualifiedName,
    pub graph: TypeGraph,
}

impl CodeGenRequest {
    pub fn new(query: impl Into<String>, return_type: QualifiedName, graph: TypeGraph) -> Self {
        Self {
            query: query.into(),
            return_type,
            graph,
        }
    }

    /// Parse a request file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a request with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_request(content, filename)
    }
}

impl FromStr for CodeGenRequest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_request(s, "request.json")
    }
}

fn parse_request(content: &str, filename: &str) -> Result<CodeGenRequest> {
    let source_ctx = SourceContext::new(content, filename);
    let wire: WireRequest =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    if wire.query.trim().is_empty() {
        return Err(source_ctx.validation_error_at_key("query must not be empty", "query"));
    }

    let return_type = wire.return_type.name.clone();

    // Catalog first so its definitions win over inline copies
    let mut nested = Vec::new();
    let mut types: Vec<_> = wire
        .schema
        .types
        .into_iter()
        .map(|ty| ty.lower(&mut nested))
        .collect();
    types.push(wire.return_type.lower(&mut nested));
    for ty in wire.anonymous_types {
        types.push(ty.lower(&mut nested));
    }
    while let Some(ty) = nested.pop() {
        types.push(ty.lower(&mut nested));
    }

    let services = wire.schema.services.into_iter().map(|s| s.lower()).collect();

    Ok(CodeGenRequest {
        query: wire.query,
        return_type,
        graph: TypeGraph::new(types, services),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrimitiveKind, TypeKind};

    const REQUEST: &str = r#"{
        "query": "find { Film[] }",
        "returnType": {
            "name": "lang.taxi.Array<films.Film>",
            "isCollection": true,
            "collectionType": {
                "name": "films.Film",
                "attributes": { "title": { "type": "films.Title", "nullable": false } }
            }
        },
        "schema": {
            "types": [
                { "name": "films.Title", "isScalar": true, "inheritsFrom": ["lang.taxi.String"] }
            ],
            "services": [
                {
                    "name": { "fullyQualifiedName": "films.FilmService" },
                    "operations": [
                        { "name": "findAll", "parameters": [], "returnTypeName": "lang.taxi.Array<films.Film>" }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_request() {
        let request: CodeGenRequest = REQUEST.parse().unwrap();
        assert_eq!(request.query, "find { Film[] }");
        assert_eq!(request.return_type.to_string(), "lang.taxi.Array<films.Film>");

        let films = request.graph.resolve(&request.return_type).unwrap();
        assert_eq!(films.kind, TypeKind::Collection(QualifiedName::new("films.Film")));

        // Inline element type is registered
        let film = request.graph.resolve(&QualifiedName::new("films.Film")).unwrap();
        assert_eq!(film.attributes().count(), 1);

        let title = request.graph.resolve(&QualifiedName::new("films.Title")).unwrap();
        assert_eq!(request.graph.base_primitive(title), Ok(PrimitiveKind::String));

        assert_eq!(request.graph.services().len(), 1);
        assert_eq!(request.graph.services()[0].operations[0].name, "findAll");
    }

    #[test]
    fn test_catalog_wins_over_return_type_copy() {
        let request: CodeGenRequest = r#"{
            "query": "find { Film }",
            "returnType": { "name": "films.Film" },
            "schema": { "types": [
                { "name": "films.Film", "attributes": { "title": { "type": "lang.taxi.String" } } }
            ] }
        }"#
        .parse()
        .unwrap();
        let film = request.graph.resolve(&request.return_type).unwrap();
        assert_eq!(film.attributes().count(), 1);
    }

    #[test]
    fn test_anonymous_types_are_registered() {
        let request: CodeGenRequest = r#"{
            "query": "find { Film[] } as { name: Title }[]",
            "returnType": { "name": "lang.taxi.Array<AnonymousProjectedTypeQ1>" },
            "schema": { "types": [], "services": [] },
            "anonymousTypes": [
                { "name": "AnonymousProjectedTypeQ1", "attributes": { "name": { "type": "lang.taxi.String" } }, "sources": [] }
            ]
        }"#
        .parse()
        .unwrap();
        let anonymous = request
            .graph
            .resolve(&QualifiedName::new("AnonymousProjectedTypeQ1"))
            .unwrap();
        assert!(anonymous.is_anonymous());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = r#"{ "query": "find { Film }", "returnType": "#
            .parse::<CodeGenRequest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_bad_type_name_is_parse_error() {
        let err = r#"{ "query": "find { Film }", "returnType": { "name": "lang.taxi.Array<films.Film" } }"#
            .parse::<CodeGenRequest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let err = r#"{ "query": " ", "returnType": { "name": "films.Film" } }"#
            .parse::<CodeGenRequest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = CodeGenRequest::from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
