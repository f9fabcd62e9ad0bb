use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for request loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw request text and its display name so parse and validation
/// errors can point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    ///
    /// serde_json reports 1-based line/column; miette wants a byte offset.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = (source.line() > 0)
            .then(|| SourceSpan::from((byte_offset(&self.src, source.line(), source.column()), 1)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error pointing at the first occurrence of a key.
    pub fn validation_error_at_key(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_key_span(&self.src, key),
            message: message.into(),
        })
    }
}

/// Byte offset of a 1-based line and column, clamped to the source.
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len().saturating_sub(1))
}

/// Span of `"key"` in a JSON document.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{key}\"");
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos, quoted.len())))
}

/// Errors raised while loading a request.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(typesnip::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse code generation request")]
    #[diagnostic(
        code(typesnip::parse_error),
        help("a request is {{ query, returnType, schema: {{ types, services }} }}")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(typesnip::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Failures looking up or resolving types in a [`TypeGraph`](crate::TypeGraph).
///
/// These are input defects: generation isolates them per declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SchemaError {
    #[error("unknown type '{name}'")]
    #[diagnostic(
        code(typesnip::unknown_type),
        help("the type is referenced but missing from the schema's type catalog")
    )]
    UnknownType { name: String },

    #[error("cyclic inheritance on '{name}': {}", .chain.join(" -> "))]
    #[diagnostic(code(typesnip::cyclic_inheritance))]
    CyclicInheritance { name: String, chain: Vec<String> },
}

impl SchemaError {
    /// The type the error is about.
    pub fn type_name(&self) -> &str {
        match self {
            Self::UnknownType { name } | Self::CyclicInheritance { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset() {
        let src = "{\n  \"query\": 1,\n  \"x\": }";
        assert_eq!(byte_offset(src, 1, 1), 0);
        assert_eq!(byte_offset(src, 2, 3), 4);
        assert_eq!(byte_offset(src, 99, 99), src.len() - 1);
    }

    #[test]
    fn test_parse_error_has_span() {
        let src = "{\n  \"query\": \n}";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = SourceContext::new(src, "request.json").parse_error(err);
        let Error::Parse { span, .. } = *err else {
            panic!("expected parse error");
        };
        assert!(span.is_some());
    }

    #[test]
    fn test_validation_error_points_at_key() {
        let src = r#"{ "query": "  ", "returnType": {} }"#;
        let err = SourceContext::new(src, "request.json").validation_error_at_key("empty", "query");
        let Error::Validation { span, .. } = *err else {
            panic!("expected validation error");
        };
        assert_eq!(span, Some(SourceSpan::from((2, 7))));
    }

    #[test]
    fn test_cyclic_message_lists_chain() {
        let err = SchemaError::CyclicInheritance {
            name: "demo.A".into(),
            chain: vec!["demo.A".into(), "demo.B".into(), "demo.A".into()],
        };
        assert_eq!(
            err.to_string(),
            "cyclic inheritance on 'demo.A': demo.A -> demo.B -> demo.A"
        );
        assert_eq!(err.type_name(), "demo.A");
    }
}
