//! Rust type mapper implementation.

use typesnip_codegen::builder::TypeMapper;
use typesnip_schema::PrimitiveKind;

/// Maps member types to Rust type syntax.
///
/// Dates use `chrono`, decimals `rust_decimal`, and anything untyped is a
/// `serde_json::Value`. Streams are collected into a `Vec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn map_primitive(&self, kind: PrimitiveKind) -> Option<&'static str> {
        match kind {
            PrimitiveKind::String => Some("String"),
            PrimitiveKind::Int => Some("i64"),
            PrimitiveKind::Decimal => Some("Decimal"),
            PrimitiveKind::Double => Some("f64"),
            PrimitiveKind::Boolean => Some("bool"),
            PrimitiveKind::Date => Some("NaiveDate"),
            PrimitiveKind::Time => Some("NaiveTime"),
            PrimitiveKind::DateTime => Some("NaiveDateTime"),
            PrimitiveKind::Instant => Some("DateTime<Utc>"),
            PrimitiveKind::Any => Some("serde_json::Value"),
            PrimitiveKind::Void => Some("()"),
            PrimitiveKind::Array | PrimitiveKind::Stream => None,
        }
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("Option<{}>", inner)
    }

    fn map_array(&self, inner: &str) -> String {
        format!("Vec<{}>", inner)
    }

    fn map_stream(&self, inner: &str) -> String {
        format!("Vec<{}>", inner)
    }

    fn map_recursive(&self, inner: &str) -> String {
        format!("Box<{}>", inner)
    }

    fn untyped(&self) -> &'static str {
        "serde_json::Value"
    }

    fn primitive_imports(&self, kind: PrimitiveKind) -> &'static [(&'static str, &'static str)] {
        match kind {
            PrimitiveKind::Decimal => &[("rust_decimal", "Decimal")],
            PrimitiveKind::Date => &[("chrono", "NaiveDate")],
            PrimitiveKind::Time => &[("chrono", "NaiveTime")],
            PrimitiveKind::DateTime => &[("chrono", "NaiveDateTime")],
            PrimitiveKind::Instant => &[("chrono", "DateTime"), ("chrono", "Utc")],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use typesnip_codegen::{builder::TypeRef, generation::ImportCollector};

    use super::*;

    #[test]
    fn test_rust_types() {
        let mapper = RustTypeMapper;
        assert_eq!(mapper.map_primitive(PrimitiveKind::Int), Some("i64"));
        assert_eq!(mapper.map_primitive(PrimitiveKind::Void), Some("()"));
        assert_eq!(
            mapper.render_type(&TypeRef::optional(TypeRef::array(TypeRef::named("Film")))),
            "Option<Vec<Film>>"
        );
        assert_eq!(
            mapper.render_type(&TypeRef::stream(TypeRef::primitive(PrimitiveKind::Instant))),
            "Vec<DateTime<Utc>>"
        );
        assert_eq!(
            mapper.render_type(&TypeRef::optional(TypeRef::recursive(TypeRef::named("Film")))),
            "Option<Box<Film>>"
        );
    }

    #[test]
    fn test_rust_imports() {
        let mut imports = ImportCollector::new();
        let mapper = RustTypeMapper;
        mapper.collect_imports(
            &TypeRef::optional(TypeRef::primitive(PrimitiveKind::Instant)),
            &mut imports,
        );
        mapper.collect_imports(&TypeRef::primitive(PrimitiveKind::Decimal), &mut imports);
        mapper.collect_imports(&TypeRef::primitive(PrimitiveKind::Any), &mut imports);
        assert!(imports.has_symbol("chrono", "DateTime"));
        assert!(imports.has_symbol("chrono", "Utc"));
        assert!(imports.has_symbol("rust_decimal", "Decimal"));
        assert_eq!(imports.len(), 2);
    }
}
