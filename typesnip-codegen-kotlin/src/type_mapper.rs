//! Kotlin type mapper implementation.

use typesnip_codegen::builder::TypeMapper;
use typesnip_schema::PrimitiveKind;

/// Kotlin type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn map_primitive(&self, kind: PrimitiveKind) -> Option<&'static str> {
        match kind {
            PrimitiveKind::String => Some("String"),
            PrimitiveKind::Int => Some("Int"),
            PrimitiveKind::Decimal => Some("BigDecimal"),
            PrimitiveKind::Double => Some("Double"),
            PrimitiveKind::Boolean => Some("Boolean"),
            PrimitiveKind::Date => Some("LocalDate"),
            PrimitiveKind::Time => Some("LocalTime"),
            PrimitiveKind::DateTime => Some("LocalDateTime"),
            PrimitiveKind::Instant => Some("Instant"),
            PrimitiveKind::Any => Some("Any"),
            PrimitiveKind::Void => Some("Unit"),
            PrimitiveKind::Array | PrimitiveKind::Stream => None,
        }
    }

    fn map_optional(&self, inner: &str) -> String {
        // The marker belongs to the type, not to a trailing comment
        match inner.split_once(" /* ") {
            Some((ty, comment)) => format!("{ty}? /* {comment}"),
            None => format!("{inner}?"),
        }
    }

    fn map_array(&self, inner: &str) -> String {
        format!("List<{inner}>")
    }

    fn map_stream(&self, inner: &str) -> String {
        format!("Flow<{inner}>")
    }

    fn untyped(&self) -> &'static str {
        "Any"
    }

    fn primitive_imports(&self, kind: PrimitiveKind) -> &'static [(&'static str, &'static str)] {
        match kind {
            PrimitiveKind::Decimal => &[("java.math", "BigDecimal")],
            PrimitiveKind::Date => &[("java.time", "LocalDate")],
            PrimitiveKind::Time => &[("java.time", "LocalTime")],
            PrimitiveKind::DateTime => &[("java.time", "LocalDateTime")],
            PrimitiveKind::Instant => &[("java.time", "Instant")],
            _ => &[],
        }
    }

    fn stream_import(&self) -> Option<(&'static str, &'static str)> {
        Some(("kotlinx.coroutines.flow", "Flow"))
    }
}

#[cfg(test)]
mod tests {
    use typesnip_codegen::{builder::TypeRef, generation::ImportCollector};

    use super::*;

    #[test]
    fn test_kotlin_types() {
        let mapper = KotlinTypeMapper;
        let ty = TypeRef::array(TypeRef::optional(TypeRef::primitive(PrimitiveKind::Decimal)));
        assert_eq!(mapper.render_type(&ty), "List<BigDecimal?>");
        assert_eq!(
            mapper.render_type(&TypeRef::stream(TypeRef::named("Film"))),
            "Flow<Film>"
        );
        assert_eq!(mapper.map_primitive(PrimitiveKind::Void), Some("Unit"));
    }

    #[test]
    fn test_optional_untyped_keeps_comment_last() {
        let ty = TypeRef::optional(TypeRef::untyped("unknown type 'films.Studio'"));
        assert_eq!(
            KotlinTypeMapper.render_type(&ty),
            "Any? /* unknown type 'films.Studio' */"
        );
    }

    #[test]
    fn test_java_time_imports() {
        let mut imports = ImportCollector::new();
        let mapper = KotlinTypeMapper;
        mapper.collect_imports(
            &TypeRef::optional(TypeRef::primitive(PrimitiveKind::Instant)),
            &mut imports,
        );
        mapper.collect_imports(&TypeRef::primitive(PrimitiveKind::Date), &mut imports);
        mapper.collect_imports(&TypeRef::primitive(PrimitiveKind::String), &mut imports);
        assert!(imports.has_symbol("java.time", "Instant"));
        assert!(imports.has_symbol("java.time", "LocalDate"));
        assert_eq!(imports.len(), 1);
    }
}
