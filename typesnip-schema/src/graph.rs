use indexmap::{IndexMap, IndexSet};

use crate::{
    Field, FormatSpec, PrimitiveKind, QualifiedName, SchemaError, Service, Type, TypeKind,
};

/// A record attribute with its type looked up.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedField<'a> {
    pub name: &'a str,
    pub field: &'a Field,
    pub ty: &'a Type,
}

/// The immutable, query-scoped set of types describing a result shape.
///
/// Types are keyed by parameterized name. The first definition of a name
/// wins. Construction never fails: references to missing types surface as
/// [`SchemaError::UnknownType`] when they are resolved.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    types: IndexMap<String, Type>,
    by_fqn: IndexMap<String, String>,
    services: Vec<Service>,
}

impl TypeGraph {
    /// Build a graph. Built-in primitives and `Array<T>`/`Stream<T>` types
    /// that are referenced but not declared are synthesized.
    pub fn new(types: impl IntoIterator<Item = Type>, services: Vec<Service>) -> Self {
        let mut graph = Self {
            services,
            ..Self::default()
        };
        for ty in types {
            graph.insert(ty);
        }
        graph.synthesize_builtins();
        graph
    }

    fn insert(&mut self, ty: Type) {
        let key = ty.name.parameterized_name();
        if self.types.contains_key(&key) {
            return;
        }
        self.by_fqn
            .entry(ty.name.fully_qualified_name().to_string())
            .or_insert_with(|| key.clone());
        self.types.insert(key, ty);
    }

    fn synthesize_builtins(&mut self) {
        let mut referenced: IndexSet<QualifiedName> = IndexSet::new();
        let mut collect = |name: &QualifiedName| {
            name.walk(&mut |n| {
                referenced.insert(n.clone());
            })
        };
        for ty in self.types.values() {
            collect(&ty.name);
            for parent in ty.parents() {
                collect(parent);
            }
            for (_, field) in ty.attributes() {
                collect(&field.type_name);
            }
            if let Some(element) = self.element_of(ty) {
                collect(element);
            }
        }

        for name in referenced {
            if self.types.contains_key(&name.parameterized_name()) {
                continue;
            }
            let Some(kind) = PrimitiveKind::from_name(name.fully_qualified_name()) else {
                continue;
            };
            let kind = match (kind, name.parameters()) {
                (PrimitiveKind::Array, [element]) => TypeKind::Collection(element.clone()),
                (PrimitiveKind::Stream, [element]) => TypeKind::Stream(element.clone()),
                (kind, []) if !kind.is_structural() => TypeKind::Primitive(kind),
                _ => continue,
            };
            self.insert(Type::new(name, kind));
        }
    }

    /// Look up a type by parameterized name, then by fully qualified name.
    pub fn resolve(&self, name: &QualifiedName) -> Result<&Type, SchemaError> {
        let key = name.parameterized_name();
        self.types
            .get(&key)
            .or_else(|| {
                self.by_fqn
                    .get(name.fully_qualified_name())
                    .and_then(|key| self.types.get(key))
            })
            .ok_or(SchemaError::UnknownType { name: key })
    }

    /// The primitive a type ultimately is.
    ///
    /// Scalars follow their parents, the first resolvable one winning.
    /// Collections are `Array`, streams `Stream`, enums `String` (or `Int`
    /// when every value is an integer) and records `Any`.
    pub fn base_primitive(&self, ty: &Type) -> Result<PrimitiveKind, SchemaError> {
        let mut chain = Vec::new();
        self.base_primitive_inner(ty, &mut chain)
    }

    fn base_primitive_inner(
        &self,
        ty: &Type,
        chain: &mut Vec<String>,
    ) -> Result<PrimitiveKind, SchemaError> {
        let key = ty.name.parameterized_name();
        if chain.contains(&key) {
            chain.push(key.clone());
            return Err(SchemaError::CyclicInheritance {
                name: key,
                chain: std::mem::take(chain),
            });
        }
        chain.push(key);

        match &ty.kind {
            TypeKind::Primitive(kind) => Ok(*kind),
            TypeKind::Collection(_) => Ok(PrimitiveKind::Array),
            TypeKind::Stream(_) => Ok(PrimitiveKind::Stream),
            TypeKind::Record(_) => Ok(PrimitiveKind::Any),
            TypeKind::Enum(values) => {
                if !values.is_empty() && values.iter().all(|v| v.is_integer()) {
                    Ok(PrimitiveKind::Int)
                } else {
                    Ok(PrimitiveKind::String)
                }
            }
            TypeKind::Scalar { parents } => {
                let mut first_error = None;
                for parent in parents {
                    match self.resolve(parent) {
                        Ok(parent) => return self.base_primitive_inner(parent, chain),
                        Err(err) => {
                            first_error.get_or_insert(err);
                        }
                    }
                }
                match first_error {
                    Some(err) => Err(err),
                    None => Ok(PrimitiveKind::Any),
                }
            }
        }
    }

    /// Attributes of a record in declaration order, each with its type
    /// resolved. Empty for non-records.
    pub fn attributes_of<'a>(&'a self, ty: &'a Type) -> Result<Vec<ResolvedField<'a>>, SchemaError> {
        ty.attributes()
            .map(|(name, field)| -> Result<ResolvedField<'a>, SchemaError> {
                Ok(ResolvedField {
                    name,
                    field,
                    ty: self.resolve(&field.type_name)?,
                })
            })
            .collect()
    }

    /// The first format declared along the inheritance chain.
    pub fn format_of<'a>(&'a self, ty: &'a Type) -> Option<&'a FormatSpec> {
        let mut seen = IndexSet::new();
        let mut current = ty;
        loop {
            if let Some(format) = &current.format {
                return Some(format);
            }
            if !seen.insert(current.name.parameterized_name()) {
                return None;
            }
            current = current
                .parents()
                .iter()
                .find_map(|parent| self.resolve(parent).ok())?;
        }
    }

    /// Element type of a collection or stream.
    pub fn element_of<'a>(&self, ty: &'a Type) -> Option<&'a QualifiedName> {
        match &ty.kind {
            TypeKind::Collection(element) | TypeKind::Stream(element) => Some(element),
            _ => None,
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
