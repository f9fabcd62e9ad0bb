//! Language-agnostic type references for generated members.
//!
//! A [`TypeRef`] is what the generator decides a member's type is. A
//! [`TypeMapper`] turns it into target-language syntax.

use typesnip_schema::PrimitiveKind;

use crate::generation::ImportCollector;

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A built-in primitive.
    Primitive(PrimitiveKind),
    /// A nullable member type.
    Optional(Box<TypeRef>),
    /// A collection of elements.
    Array(Box<TypeRef>),
    /// A stream of elements.
    Stream(Box<TypeRef>),
    /// A reference back to a declaration that contains it.
    Recursive(Box<TypeRef>),
    /// A declaration emitted in the model snippet.
    Named(String),
    /// The most generic type of the language, used when resolution failed.
    Untyped {
        /// Rendered next to the fallback as an inline comment.
        note: Option<String>,
    },
}

impl TypeRef {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn stream(inner: TypeRef) -> Self {
        Self::Stream(Box::new(inner))
    }

    pub fn recursive(inner: TypeRef) -> Self {
        Self::Recursive(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Untyped fallback with an explanatory note.
    pub fn untyped(note: impl Into<String>) -> Self {
        Self::Untyped {
            note: Some(note.into()),
        }
    }

    /// Visit every primitive this type mentions.
    pub fn visit_primitives(&self, visit: &mut impl FnMut(PrimitiveKind)) {
        match self {
            Self::Primitive(kind) => visit(*kind),
            Self::Optional(inner)
            | Self::Array(inner)
            | Self::Stream(inner)
            | Self::Recursive(inner) => inner.visit_primitives(visit),
            Self::Named(_) | Self::Untyped { .. } => {}
        }
    }
}

/// Maps [`TypeRef`]s to a target language's type syntax.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper: Send + Sync {
    /// Built-in name for a primitive, `None` when the language has no mapping.
    fn map_primitive(&self, kind: PrimitiveKind) -> Option<&'static str>;

    /// Map a nullable type (e.g., `Option<T>`, `T?`).
    fn map_optional(&self, inner: &str) -> String;

    /// Map a collection type (e.g., `Vec<T>`, `T[]`).
    fn map_array(&self, inner: &str) -> String;

    /// Map a stream type (e.g., `Flow<T>`, `Observable<T>`).
    fn map_stream(&self, inner: &str) -> String;

    /// Map a reference to an enclosing declaration. Languages with
    /// reference semantics render the inner type as is.
    fn map_recursive(&self, inner: &str) -> String {
        inner.to_string()
    }

    /// The most generic type of the language.
    fn untyped(&self) -> &'static str;

    /// Wrap text in a comment that can sit inside a type position.
    fn inline_comment(&self, text: &str) -> String {
        format!("/* {text} */")
    }

    /// Imports a mapped primitive needs, as `(module, symbol)` pairs.
    fn primitive_imports(&self, _kind: PrimitiveKind) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Import the stream wrapper needs, if any.
    fn stream_import(&self) -> Option<(&'static str, &'static str)> {
        None
    }

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(kind) => match self.map_primitive(*kind) {
                Some(name) => name.to_string(),
                None => format!(
                    "{} {}",
                    self.untyped(),
                    self.inline_comment(&format!("unsupported primitive {kind}"))
                ),
            },
            TypeRef::Optional(inner) => {
                let inner_str = self.render_type(inner);
                self.map_optional(&inner_str)
            }
            TypeRef::Array(inner) => {
                let inner_str = self.render_type(inner);
                self.map_array(&inner_str)
            }
            TypeRef::Stream(inner) => {
                let inner_str = self.render_type(inner);
                self.map_stream(&inner_str)
            }
            TypeRef::Recursive(inner) => {
                let inner_str = self.render_type(inner);
                self.map_recursive(&inner_str)
            }
            TypeRef::Named(name) => name.clone(),
            TypeRef::Untyped { note: None } => self.untyped().to_string(),
            TypeRef::Untyped { note: Some(note) } => {
                format!("{} {}", self.untyped(), self.inline_comment(note))
            }
        }
    }

    /// Record the imports a rendered type needs.
    fn collect_imports(&self, ty: &TypeRef, imports: &mut ImportCollector) {
        match ty {
            TypeRef::Primitive(kind) => {
                if self.map_primitive(*kind).is_some() {
                    for (module, symbol) in self.primitive_imports(*kind) {
                        imports.add(module, symbol);
                    }
                }
            }
            TypeRef::Stream(inner) => {
                if let Some((module, symbol)) = self.stream_import() {
                    imports.add(module, symbol);
                }
                self.collect_imports(inner, imports);
            }
            TypeRef::Optional(inner) | TypeRef::Array(inner) | TypeRef::Recursive(inner) => {
                self.collect_imports(inner, imports)
            }
            TypeRef::Named(_) | TypeRef::Untyped { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestMapper;

    impl TypeMapper for TestMapper {
        fn map_primitive(&self, kind: PrimitiveKind) -> Option<&'static str> {
            match kind {
                PrimitiveKind::String => Some("str"),
                PrimitiveKind::Date => Some("Date"),
                _ => None,
            }
        }

        fn map_optional(&self, inner: &str) -> String {
            format!("{inner}?")
        }

        fn map_array(&self, inner: &str) -> String {
            format!("{inner}[]")
        }

        fn map_stream(&self, inner: &str) -> String {
            format!("Stream<{inner}>")
        }

        fn untyped(&self) -> &'static str {
            "any"
        }

        fn primitive_imports(&self, kind: PrimitiveKind) -> &'static [(&'static str, &'static str)] {
            match kind {
                PrimitiveKind::Date => &[("time", "Date")],
                _ => &[],
            }
        }

        fn stream_import(&self) -> Option<(&'static str, &'static str)> {
            Some(("streams", "Stream"))
        }
    }

    #[test]
    fn test_render_nested() {
        let ty = TypeRef::optional(TypeRef::array(TypeRef::primitive(PrimitiveKind::String)));
        assert_eq!(TestMapper.render_type(&ty), "str[]?");
        assert_eq!(
            TestMapper.render_type(&TypeRef::stream(TypeRef::named("Film"))),
            "Stream<Film>"
        );
    }

    #[test]
    fn test_render_unmapped_primitive_falls_back() {
        let ty = TypeRef::primitive(PrimitiveKind::Int);
        assert_eq!(
            TestMapper.render_type(&ty),
            "any /* unsupported primitive Int */"
        );
    }

    #[test]
    fn test_render_untyped() {
        assert_eq!(TestMapper.render_type(&TypeRef::Untyped { note: None }), "any");
        assert_eq!(
            TestMapper.render_type(&TypeRef::untyped("unknown type films.Studio")),
            "any /* unknown type films.Studio */"
        );
    }

    #[test]
    fn test_collect_imports() {
        let mut imports = ImportCollector::new();
        let ty = TypeRef::stream(TypeRef::optional(TypeRef::primitive(PrimitiveKind::Date)));
        TestMapper.collect_imports(&ty, &mut imports);
        assert!(imports.has_symbol("streams", "Stream"));
        assert!(imports.has_symbol("time", "Date"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_visit_primitives() {
        let ty = TypeRef::array(TypeRef::optional(TypeRef::primitive(PrimitiveKind::Int)));
        let mut seen = Vec::new();
        ty.visit_primitives(&mut |kind| seen.push(kind));
        assert_eq!(seen, vec![PrimitiveKind::Int]);
    }

    #[test]
    fn test_recursive_renders_inner_by_default() {
        let ty = TypeRef::optional(TypeRef::recursive(TypeRef::named("Film")));
        assert_eq!(TestMapper.render_type(&ty), "Film?");
    }
}
