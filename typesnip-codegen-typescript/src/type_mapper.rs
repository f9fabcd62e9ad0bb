//! TypeScript type mapper implementation.

use typesnip_codegen::builder::TypeMapper;
use typesnip_schema::PrimitiveKind;

/// TypeScript type mapper implementation.
///
/// Dates and times stay `string`: JSON carries them as text in the
/// declared format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_primitive(&self, kind: PrimitiveKind) -> Option<&'static str> {
        match kind {
            PrimitiveKind::String => Some("string"),
            PrimitiveKind::Int => Some("number"),
            PrimitiveKind::Decimal => Some("number"),
            PrimitiveKind::Double => Some("number"),
            PrimitiveKind::Boolean => Some("boolean"),
            PrimitiveKind::Date
            | PrimitiveKind::Time
            | PrimitiveKind::DateTime
            | PrimitiveKind::Instant => Some("string"),
            PrimitiveKind::Any => Some("any"),
            PrimitiveKind::Void => Some("void"),
            PrimitiveKind::Array | PrimitiveKind::Stream => None,
        }
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("{inner} | undefined")
    }

    fn map_array(&self, inner: &str) -> String {
        // `A | B[]` would bind the brackets to B only
        if inner.contains(' ') {
            format!("({inner})[]")
        } else {
            format!("{inner}[]")
        }
    }

    fn map_stream(&self, inner: &str) -> String {
        format!("Observable<{inner}>")
    }

    fn untyped(&self) -> &'static str {
        "any"
    }

    fn stream_import(&self) -> Option<(&'static str, &'static str)> {
        Some(("rxjs", "Observable"))
    }
}
