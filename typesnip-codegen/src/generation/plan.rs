//! Emission planning: which declarations a snippet needs, and in which order.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;
use typesnip_schema::{QualifiedName, SchemaError, Type, TypeGraph, TypeKind};

/// One slot in the model snippet.
#[derive(Debug, Clone)]
pub enum PlanEntry<'a> {
    /// A record or enum declaration.
    Declare(&'a Type),
    /// A referenced type missing from the graph.
    Missing {
        name: String,
        referenced_by: Option<String>,
    },
}

/// A reference to a declaration that was still being planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursiveReference {
    /// Key of the declaration holding the reference.
    pub from: String,
    /// Key of the declaration referenced.
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Declarations in dependency order: every declaration comes after the
/// declarations its members reference, except for recursive references.
#[derive(Debug, Clone, Default)]
pub struct EmissionPlan<'a> {
    pub entries: Vec<PlanEntry<'a>>,
    pub recursive: Vec<RecursiveReference>,
    pub errors: Vec<SchemaError>,
}

impl<'a> EmissionPlan<'a> {
    /// Plan the declarations reachable from `root`.
    ///
    /// Collection and stream layers are unwrapped to their elements.
    /// Primitives and scalars are rendered inline and never declared.
    pub fn build(graph: &'a TypeGraph, root: &QualifiedName) -> Self {
        let mut planner = Planner {
            graph,
            state: IndexMap::new(),
            missing: IndexSet::new(),
            plan: EmissionPlan::default(),
        };
        planner.visit(root, None);
        debug!(
            root = %root,
            entries = planner.plan.entries.len(),
            recursive = planner.plan.recursive.len(),
            "planned declarations"
        );
        planner.plan
    }

    /// The declared types, in order.
    pub fn declarations(&self) -> impl Iterator<Item = &'a Type> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            PlanEntry::Declare(ty) => Some(*ty),
            PlanEntry::Missing { .. } => None,
        })
    }
}

struct Planner<'a> {
    graph: &'a TypeGraph,
    state: IndexMap<String, Visit>,
    missing: IndexSet<String>,
    plan: EmissionPlan<'a>,
}

impl<'a> Planner<'a> {
    fn visit(&mut self, name: &QualifiedName, referenced_by: Option<&str>) {
        let ty = match self.graph.resolve(name) {
            Ok(ty) => ty,
            Err(err) => {
                let key = err.type_name().to_string();
                if self.missing.insert(key.clone()) {
                    self.plan.entries.push(PlanEntry::Missing {
                        name: key,
                        referenced_by: referenced_by.map(str::to_string),
                    });
                    self.plan.errors.push(err);
                }
                return;
            }
        };

        let key = ty.name.parameterized_name();
        match self.state.get(&key) {
            Some(Visit::Done) => return,
            Some(Visit::InProgress) => {
                if let (Some(from), TypeKind::Record(_)) = (referenced_by, &ty.kind) {
                    self.plan.recursive.push(RecursiveReference {
                        from: from.to_string(),
                        to: key,
                    });
                }
                return;
            }
            None => {}
        }

        self.state.insert(key.clone(), Visit::InProgress);
        match &ty.kind {
            TypeKind::Collection(element) | TypeKind::Stream(element) => {
                self.visit(element, referenced_by);
            }
            TypeKind::Record(fields) => {
                for field in fields.values() {
                    self.visit(&field.type_name, Some(&key));
                }
                self.plan.entries.push(PlanEntry::Declare(ty));
            }
            TypeKind::Enum(_) => self.plan.entries.push(PlanEntry::Declare(ty)),
            TypeKind::Primitive(_) | TypeKind::Scalar { .. } => {}
        }
        self.state.insert(key, Visit::Done);
    }
}

#[cfg(test)]
mod tests {
    use typesnip_schema::{EnumValue, Field};

    use super::*;
    use crate::{
        generation::NameTable,
        language::{LanguageCodegen, UnmappedTarget},
    };

    fn keys(plan: &EmissionPlan<'_>) -> Vec<String> {
        plan.entries
            .iter()
            .map(|entry| match entry {
                PlanEntry::Declare(ty) => ty.name.parameterized_name(),
                PlanEntry::Missing { name, .. } => format!("missing {name}"),
            })
            .collect()
    }

    fn genre() -> Type {
        Type::new(
            QualifiedName::new("films.Genre"),
            TypeKind::Enum(vec![EnumValue::new("Action")]),
        )
    }

    #[test]
    fn test_dependencies_come_first() {
        let graph = TypeGraph::new(
            vec![
                Type::record(
                    "films.Film",
                    [
                        ("title", Field::new("lang.taxi.String")),
                        ("studio", Field::new("films.Studio")),
                        ("genre", Field::new("films.Genre")),
                    ],
                ),
                Type::record(
                    "films.Studio",
                    [
                        ("name", Field::new("lang.taxi.String")),
                        ("genre", Field::new("films.Genre")),
                    ],
                ),
                genre(),
            ],
            Vec::new(),
        );
        let plan = EmissionPlan::build(&graph, &QualifiedName::new("films.Film"));
        assert_eq!(keys(&plan), vec!["films.Genre", "films.Studio", "films.Film"]);
        assert!(plan.errors.is_empty());
    }

    #[test]
    fn test_recursive_reference_is_recorded_not_followed() {
        let graph = TypeGraph::new(
            vec![Type::record(
                "films.Film",
                [
                    ("title", Field::new("lang.taxi.String")),
                    ("sequels", Field::of("lang.taxi.Array<films.Film>".parse().unwrap())),
                ],
            )],
            Vec::new(),
        );
        let plan = EmissionPlan::build(&graph, &QualifiedName::new("films.Film"));
        assert_eq!(keys(&plan), vec!["films.Film"]);
        assert_eq!(
            plan.recursive,
            vec![RecursiveReference {
                from: "films.Film".into(),
                to: "films.Film".into(),
            }]
        );
    }

    #[test]
    fn test_missing_types_are_placeholders_in_place() {
        let graph = TypeGraph::new(
            vec![
                Type::record(
                    "films.Film",
                    [
                        ("studio", Field::new("films.Studio")),
                        ("review", Field::new("films.Review")),
                    ],
                ),
                Type::record("films.Review", [("studio", Field::new("films.Studio"))]),
            ],
            Vec::new(),
        );
        let plan = EmissionPlan::build(&graph, &QualifiedName::new("films.Film"));
        assert_eq!(
            keys(&plan),
            vec!["missing films.Studio", "films.Review", "films.Film"]
        );
        assert_eq!(plan.errors.len(), 1);
        assert_eq!(plan.declarations().count(), 2);
    }

    #[test]
    fn test_identical_anonymous_types_stay_distinct() {
        let projection = |name: &str| {
            Type::record(
                name,
                [
                    ("title", Field::new("lang.taxi.String")),
                    ("year", Field::new("lang.taxi.Int")),
                ],
            )
        };
        let graph = TypeGraph::new(
            vec![
                Type::record(
                    "films.Release",
                    [
                        ("film", Field::new("films.AnonymousType")),
                        ("remake", Field::new("archive.AnonymousType")),
                    ],
                ),
                projection("films.AnonymousType"),
                projection("archive.AnonymousType"),
            ],
            Vec::new(),
        );
        let plan = EmissionPlan::build(&graph, &QualifiedName::new("films.Release"));
        assert_eq!(plan.declarations().filter(|ty| ty.is_anonymous()).count(), 2);
        assert_eq!(
            keys(&plan),
            vec!["films.AnonymousType", "archive.AnonymousType", "films.Release"]
        );

        let target = UnmappedTarget::new("cobol");
        let names = NameTable::new(plan.declarations(), target.naming());
        assert_eq!(names.get("films.AnonymousType"), Some("FilmsAnonymousType"));
        assert_eq!(names.get("archive.AnonymousType"), Some("ArchiveAnonymousType"));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_scalar_root_declares_nothing() {
        let titles: QualifiedName = "lang.taxi.Array<films.Title>".parse().unwrap();
        let graph = TypeGraph::new(
            vec![
                Type::scalar("films.Title", &["lang.taxi.String"]),
                Type::new(
                    titles.clone(),
                    TypeKind::Collection(QualifiedName::new("films.Title")),
                ),
            ],
            Vec::new(),
        );
        let plan = EmissionPlan::build(&graph, &titles);
        assert!(plan.entries.is_empty());
    }

    #[test]
    fn test_unknown_root() {
        let graph = TypeGraph::default();
        let plan = EmissionPlan::build(&graph, &QualifiedName::new("films.Film"));
        assert_eq!(keys(&plan), vec!["missing films.Film"]);
        assert!(matches!(
            plan.errors.as_slice(),
            [SchemaError::UnknownType { name }] if name == "films.Film"
        ));
    }
}
