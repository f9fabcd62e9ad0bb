//! Declaration names, unique within one model snippet.

use indexmap::{IndexMap, IndexSet};
use typesnip_schema::Type;

use crate::language::NamingConvention;

/// Maps a type's parameterized name to its declaration name.
///
/// Names are the short name in the language's type case. When two
/// declarations share one, the namespace is prefixed, and a numeric suffix
/// settles what is left. Assignment follows declaration order, so output
/// is stable.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: IndexMap<String, String>,
}

impl NameTable {
    pub fn new<'a>(declarations: impl IntoIterator<Item = &'a Type>, naming: &NamingConvention) -> Self {
        let declarations: Vec<&Type> = declarations.into_iter().collect();

        let mut uses: IndexMap<String, usize> = IndexMap::new();
        for ty in &declarations {
            *uses.entry(naming.type_name(ty.name.name())).or_default() += 1;
        }

        let mut taken: IndexSet<String> = uses
            .iter()
            .filter(|(_, count)| **count == 1)
            .map(|(name, _)| name.clone())
            .collect();

        let mut names = IndexMap::new();
        for ty in declarations {
            let short = naming.type_name(ty.name.name());
            let name = if uses.get(&short) == Some(&1) {
                short
            } else {
                let candidate = match ty.name.namespace() {
                    "" => short,
                    namespace => naming.type_name(&format!("{namespace}.{}", ty.name.name())),
                };
                let mut name = candidate.clone();
                let mut suffix = 2;
                while taken.contains(&name) {
                    name = format!("{candidate}{suffix}");
                    suffix += 1;
                }
                taken.insert(name.clone());
                name
            };
            names.insert(ty.name.parameterized_name(), name);
        }
        Self { names }
    }

    /// Declaration name for a type's parameterized name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
