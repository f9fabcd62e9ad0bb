//! The snippet generator: one request in, labelled snippets out.

use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, warn};
use typesnip_schema::{
    CodeGenRequest, Field, FormatSpec, PrimitiveKind, QualifiedName, Type, TypeGraph, TypeKind,
};

use super::{
    Diagnostic, EmissionPlan, GenerationError, ImportCollector, NameTable, PlanEntry,
    RecursiveReference,
};
use crate::{
    builder::{EnumSpec, FieldSpec, StructSpec, TypeRef, VariantSpec},
    language::{LanguageCodegen, QuerySnippet},
};

/// Label of the declarations snippet.
pub const MODEL_LABEL: &str = "model";
/// Label of the query snippet.
pub const QUERY_LABEL: &str = "query";

/// Caller choices that are not part of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Identifier the query snippet calls `query` on.
    pub client: String,
    /// Render type docs and formats as doc comments.
    pub docs: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            client: "client".to_string(),
            docs: true,
        }
    }
}

/// One labelled, language-tagged block of generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSnippet {
    pub label: String,
    pub language: String,
    pub content: String,
}

/// Snippets plus everything that went wrong producing them.
#[derive(Debug, Clone, Default)]
pub struct GenerationOutput {
    pub snippets: Vec<GeneratedSnippet>,
    /// Distinct failures, in the order they were found.
    pub errors: Vec<GenerationError>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationOutput {
    pub fn snippet(&self, label: &str) -> Option<&GeneratedSnippet> {
        self.snippets.iter().find(|s| s.label == label)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Generate the `model` and `query` snippets of a request for one target.
///
/// Never fails: unknown types become placeholder comments, cyclic and
/// unmappable types render with the target's untyped fallback. The model
/// snippet is omitted when there is nothing to declare, and for query-only
/// targets.
pub fn generate(
    target: &dyn LanguageCodegen,
    request: &CodeGenRequest,
    options: &GenerateOptions,
) -> GenerationOutput {
    if !target.renders_model() {
        return query_only(target, request, options);
    }

    let graph = &request.graph;
    let plan = EmissionPlan::build(graph, &request.return_type);
    let names = NameTable::new(plan.declarations(), target.naming());

    let mut ctx = Context {
        target,
        graph,
        names: &names,
        recursive: &plan.recursive,
        options,
        output: GenerationOutput::default(),
    };

    for err in &plan.errors {
        let location = plan.entries.iter().find_map(|entry| match entry {
            PlanEntry::Missing {
                name,
                referenced_by,
            } if name == err.type_name() => referenced_by.as_deref(),
            _ => None,
        });
        let location = location.map(|key| names.get(key).unwrap_or(key));
        ctx.report(GenerationError::Schema(err.clone()), location);
    }
    for reference in &plan.recursive {
        let to = names.get(&reference.to).unwrap_or(reference.to.as_str());
        let from = names.get(&reference.from).unwrap_or(reference.from.as_str());
        ctx.output.diagnostics.push(
            Diagnostic::info("plan", format!("recursive reference to {to} is rendered by name"))
                .at(from),
        );
    }

    let mut declarations = Vec::new();
    let mut field_types = Vec::new();
    for entry in &plan.entries {
        let rendered = match entry {
            PlanEntry::Declare(ty) => match &ty.kind {
                TypeKind::Enum(_) => ctx.render_enum(ty),
                _ => {
                    let spec = ctx.struct_spec(ty);
                    field_types.extend(spec.fields.iter().map(|f| f.ty.clone()));
                    target.structure_renderer().render_struct(&spec)
                }
            },
            PlanEntry::Missing { name, .. } => {
                let mut line = target.line_comment(&format!(
                    "unknown type '{name}': declaration skipped"
                ));
                line.push('\n');
                line
            }
        };
        declarations.push(rendered);
    }

    let result_type = match graph.resolve(&request.return_type) {
        Ok(ty) => ctx.type_ref(ty, &mut Vec::new(), None),
        Err(err) => TypeRef::untyped(err.to_string()),
    };

    // One placeholder per distinct primitive the target cannot map
    let mapper = target.type_mapper();
    let mut unmapped = IndexSet::new();
    for ty in field_types.iter().chain([&result_type]) {
        ty.visit_primitives(&mut |kind| {
            if mapper.map_primitive(kind).is_none() {
                unmapped.insert(kind);
            }
        });
    }
    let mut placeholders = String::new();
    for kind in &unmapped {
        let fallback = mapper.untyped();
        placeholders.push_str(&target.line_comment(&format!(
            "unsupported primitive {kind}: rendered as {fallback}"
        )));
        placeholders.push('\n');
        ctx.report(
            GenerationError::UnsupportedPrimitive {
                language: target.language().to_string(),
                kind: *kind,
            },
            None,
        );
    }

    let mut sections = Vec::new();
    if plan.declarations().next().is_some() {
        let mut imports = ImportCollector::new();
        target.model_imports(&mut imports);
        for ty in &field_types {
            mapper.collect_imports(ty, &mut imports);
        }
        if !imports.is_empty() {
            sections.push(target.render_imports(&imports));
        }
    }
    if !placeholders.is_empty() {
        sections.push(placeholders);
    }
    sections.extend(declarations);

    let language = target.language().to_string();
    if !sections.is_empty() {
        let content = sections
            .iter()
            .map(|s| s.trim_end_matches('\n'))
            .collect::<Vec<_>>()
            .join("\n\n");
        ctx.output.snippets.push(GeneratedSnippet {
            label: MODEL_LABEL.to_string(),
            language: language.clone(),
            content: format!("{content}\n"),
        });
    }

    let rendered_result = mapper.render_type(&result_type);
    ctx.output.snippets.push(GeneratedSnippet {
        label: QUERY_LABEL.to_string(),
        language,
        content: target.render_query(&QuerySnippet {
            query: request.query.trim(),
            return_type: &request.return_type,
            result_type: &rendered_result,
            client: &options.client,
        }),
    });

    debug!(
        language = target.language(),
        declarations = names.len(),
        errors = ctx.output.errors.len(),
        "generated snippets"
    );
    ctx.output
}

/// The query snippet of a target that declares no types.
fn query_only(
    target: &dyn LanguageCodegen,
    request: &CodeGenRequest,
    options: &GenerateOptions,
) -> GenerationOutput {
    let result_type = request.return_type.parameterized_name();
    let content = target.render_query(&QuerySnippet {
        query: request.query.trim(),
        return_type: &request.return_type,
        result_type: &result_type,
        client: &options.client,
    });
    debug!(language = target.language(), "generated query snippet");
    GenerationOutput {
        snippets: vec![GeneratedSnippet {
            label: QUERY_LABEL.to_string(),
            language: target.language().to_string(),
            content,
        }],
        ..GenerationOutput::default()
    }
}

struct Context<'a> {
    target: &'a dyn LanguageCodegen,
    graph: &'a TypeGraph,
    names: &'a NameTable,
    recursive: &'a [RecursiveReference],
    options: &'a GenerateOptions,
    output: GenerationOutput,
}

impl Context<'_> {
    fn report(&mut self, err: GenerationError, location: Option<&str>) {
        warn!(language = self.target.language(), location, "{err}");
        self.output.diagnostics.push(err.to_diagnostic(location));
        if !self.output.errors.contains(&err) {
            self.output.errors.push(err);
        }
    }

    fn declared_name(&self, ty: &Type) -> String {
        let key = ty.name.parameterized_name();
        match self.names.get(&key) {
            Some(name) => name.to_string(),
            None => self.target.naming().type_name(ty.name.name()),
        }
    }

    fn struct_spec(&mut self, ty: &Type) -> StructSpec {
        let name = self.declared_name(ty);
        let key = ty.name.parameterized_name();
        let mut spec = StructSpec::new(&name).docs(self.type_docs(ty));
        for (attribute, field) in ty.attributes() {
            let location = format!("{name}.{attribute}");
            let member = match self.graph.resolve(&field.type_name) {
                Ok(member) if self.is_recursive(&key, member) => {
                    TypeRef::recursive(self.type_ref(member, &mut Vec::new(), Some(&location)))
                }
                Ok(member) => self.type_ref(member, &mut Vec::new(), Some(&location)),
                // Already reported as a missing declaration
                Err(err) => TypeRef::untyped(err.to_string()),
            };
            let member = if field.nullable {
                TypeRef::optional(member)
            } else {
                member
            };
            let docs = self.field_docs(field);
            spec = spec.field(FieldSpec::new(attribute, member).docs(docs));
        }
        spec
    }

    /// Whether a member of declaration `from` refers back to a record that
    /// encloses it. References through collections are not affected.
    fn is_recursive(&self, from: &str, member: &Type) -> bool {
        matches!(member.kind, TypeKind::Record(_))
            && self.recursive.iter().any(|reference| {
                reference.from == from && reference.to == member.name.parameterized_name()
            })
    }

    fn render_enum(&mut self, ty: &Type) -> String {
        let TypeKind::Enum(values) = &ty.kind else {
            return String::new();
        };
        let docs = self.options.docs;
        let variants = values.iter().map(|value| {
            let variant = VariantSpec::new(&value.name).with_value(value.value.clone());
            match &value.doc {
                Some(doc) if docs => doc_lines(doc).fold(variant, |v, line| v.doc(line)),
                _ => variant,
            }
        });
        let spec = EnumSpec::new(self.declared_name(ty))
            .docs(self.type_docs(ty))
            .variants(variants);
        self.target.structure_renderer().render_enum(&spec)
    }

    /// The member type a resolved type renders as.
    ///
    /// `seen` guards against collections that contain themselves.
    fn type_ref(&mut self, ty: &Type, seen: &mut Vec<String>, location: Option<&str>) -> TypeRef {
        let key = ty.name.parameterized_name();
        if seen.contains(&key) {
            return TypeRef::untyped(format!("self-containing collection {key}"));
        }
        match &ty.kind {
            TypeKind::Primitive(kind) if !kind.is_structural() => TypeRef::primitive(*kind),
            TypeKind::Primitive(kind) => TypeRef::untyped(format!("bare {kind} without element type")),
            TypeKind::Enum(_) | TypeKind::Record(_) => TypeRef::named(self.declared_name(ty)),
            TypeKind::Scalar { .. } => match self.graph.base_primitive(ty) {
                Ok(kind) if !kind.is_structural() => TypeRef::primitive(kind),
                Ok(kind) => TypeRef::untyped(format!("{key} inherits from {kind}")),
                Err(err) => {
                    let note = err.to_string();
                    self.report(GenerationError::Schema(err), location);
                    TypeRef::untyped(note)
                }
            },
            TypeKind::Collection(element) | TypeKind::Stream(element) => {
                seen.push(key);
                let inner = self.element_ref(element, seen, location);
                seen.pop();
                if matches!(ty.kind, TypeKind::Stream(_)) {
                    TypeRef::stream(inner)
                } else {
                    TypeRef::array(inner)
                }
            }
        }
    }

    fn element_ref(
        &mut self,
        element: &QualifiedName,
        seen: &mut Vec<String>,
        location: Option<&str>,
    ) -> TypeRef {
        match self.graph.resolve(element) {
            Ok(ty) => self.type_ref(ty, seen, location),
            Err(err) => {
                let note = err.to_string();
                let err = GenerationError::Schema(err);
                // Elements are planned, so most are reported as missing already
                if !self.output.errors.contains(&err) {
                    self.report(err, location);
                }
                TypeRef::untyped(note)
            }
        }
    }

    fn type_docs(&self, ty: &Type) -> Vec<String> {
        if !self.options.docs {
            return Vec::new();
        }
        ty.doc.as_deref().map(doc_lines).into_iter().flatten().collect()
    }

    fn field_docs(&self, field: &Field) -> Vec<String> {
        if !self.options.docs {
            return Vec::new();
        }
        let mut lines: Vec<String> = field.doc.as_deref().map(doc_lines).into_iter().flatten().collect();

        let format = field.format.as_ref().or_else(|| {
            self.graph
                .resolve(&field.type_name)
                .ok()
                .and_then(|ty| self.graph.format_of(ty))
        });
        if let Some(format) = format.and_then(format_line) {
            lines.push(format);
        }

        for annotation in self.target.recognised_annotations() {
            if field.metadata.iter().any(|m| m.is(annotation)) {
                lines.push(format!("@{}", annotation.to_lowercase()));
            }
        }
        lines
    }
}

fn doc_lines(doc: &str) -> impl Iterator<Item = String> + '_ {
    doc.trim()
        .lines()
        .map(|line| line.trim().to_string())
}

/// "Format: `dd/MM/yyyy` (UTC offset +60 minutes)"
fn format_line(format: &FormatSpec) -> Option<String> {
    if format.patterns.is_empty() && format.offset.is_none() {
        return None;
    }
    let mut line = String::from("Format:");
    if !format.patterns.is_empty() {
        let patterns: Vec<String> = format.patterns.iter().map(|p| format!("`{p}`")).collect();
        line.push(' ');
        line.push_str(&patterns.join(", "));
    }
    if let Some(offset) = format.offset {
        line.push_str(&format!(" (UTC offset {offset:+} minutes)"));
    }
    Some(line)
}

/// Every primitive kind a target maps, for tests and `languages` listings.
pub fn mapped_primitives(target: &dyn LanguageCodegen) -> Vec<PrimitiveKind> {
    PrimitiveKind::SCALARS
        .into_iter()
        .filter(|kind| target.type_mapper().map_primitive(*kind).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use typesnip_schema::{EnumValue, Metadata};

    use super::*;
    use crate::{
        generation::Severity,
        language::{JsonTarget, UnmappedTarget},
        testing::{FILM_REQUEST, film_request, releases_request},
    };

    fn request(types: Vec<Type>, root: &str) -> CodeGenRequest {
        CodeGenRequest::new(
            "find { Film[] }",
            root.parse().unwrap(),
            TypeGraph::new(types, Vec::new()),
        )
    }

    fn unmapped() -> UnmappedTarget {
        UnmappedTarget::new("cobol")
    }

    #[test]
    fn test_film_scenario_with_unmapped_target() {
        let output = generate(&unmapped(), &film_request(), &GenerateOptions::default());
        let model = output.snippet(MODEL_LABEL).unwrap();
        assert_eq!(model.language, "cobol");
        insta::assert_snapshot!(model.content, @r#"
        // unsupported primitive Int: rendered as any
        // unsupported primitive String: rendered as any
        // unsupported primitive Date: rendered as any

        /** A film in the catalog */
        type Film {
          filmId: any /* unsupported primitive Int */
          title: any /* unsupported primitive String */
          /** Format: `dd/MM/yyyy` */
          releaseDate: any /* unsupported primitive Date */
          rating: any /* unsupported primitive Int */
          runtime: any /* unsupported primitive Int */
          description: any /* unsupported primitive String */
        }
        "#);

        let unsupported: Vec<&GenerationError> = output
            .errors
            .iter()
            .filter(|e| matches!(e, GenerationError::UnsupportedPrimitive { .. }))
            .collect();
        assert_eq!(unsupported.len(), 3);
        assert!(!output.has_errors());
    }

    #[test]
    fn test_query_snippet_is_always_produced() {
        let output = generate(&unmapped(), &film_request(), &GenerateOptions::default());
        let query = output.snippet(QUERY_LABEL).unwrap();
        assert_eq!(query.content, "// Result: Film[]\nfind { Film[] }\n");
    }

    #[test]
    fn test_output_is_deterministic() {
        let request = film_request();
        let first = generate(&unmapped(), &request, &GenerateOptions::default());
        let second = generate(&unmapped(), &request, &GenerateOptions::default());
        assert_eq!(first.snippets, second.snippets);
        assert_eq!(first.diagnostics, second.diagnostics);
        assert!(FILM_REQUEST.contains("\"films.Film\""));
    }

    #[test]
    fn test_query_only_target_skips_resolution() {
        let output = generate(&JsonTarget::new(), &releases_request(), &GenerateOptions::default());
        let labels: Vec<&str> = output.snippets.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec![QUERY_LABEL]);
        assert!(output.diagnostics.is_empty());
        assert!(output.errors.is_empty());
        assert!(output.snippets[0].content.contains("\"returnType\": \"lang.taxi.Stream<films.NewFilmReleaseAnnouncement>\""));
    }

    #[test]
    fn test_docs_can_be_disabled() {
        let options = GenerateOptions {
            docs: false,
            ..GenerateOptions::default()
        };
        let output = generate(&unmapped(), &film_request(), &options);
        let model = &output.snippet(MODEL_LABEL).unwrap().content;
        assert!(!model.contains("/**"));
    }

    #[test]
    fn test_unknown_type_becomes_placeholder() {
        let output = generate(
            &unmapped(),
            &request(
                vec![Type::record(
                    "films.Film",
                    [
                        ("studio", Field::new("films.Studio")),
                        ("title", Field::new("films.Title")),
                    ],
                )],
                "films.Film",
            ),
            &GenerateOptions::default(),
        );
        let model = &output.snippet(MODEL_LABEL).unwrap().content;
        assert_eq!(
            model,
            "// unknown type 'films.Studio': declaration skipped\n\n\
             // unknown type 'films.Title': declaration skipped\n\n\
             type Film {\n  studio: any /* unknown type 'films.Studio' */\n  title: any /* unknown type 'films.Title' */\n}\n"
        );
        assert!(output.has_errors());
        let located: Vec<Option<&str>> = output
            .diagnostics
            .iter()
            .map(|d| d.location.as_deref())
            .collect();
        assert_eq!(located, vec![Some("Film"), Some("Film")]);
        assert_eq!(output.errors.len(), 2);
    }

    #[test]
    fn test_cyclic_scalar_renders_untyped_with_warning() {
        let output = generate(
            &unmapped(),
            &request(
                vec![
                    Type::record("films.Film", [("rating", Field::new("films.Rating"))]),
                    Type::scalar("films.Rating", &["films.Score"]),
                    Type::scalar("films.Score", &["films.Rating"]),
                ],
                "films.Film",
            ),
            &GenerateOptions::default(),
        );
        let model = &output.snippet(MODEL_LABEL).unwrap().content;
        assert!(model.contains(
            "rating: any /* cyclic inheritance on 'films.Rating': films.Rating -> films.Score -> films.Rating */"
        ));
        let diagnostic = &output.diagnostics[0];
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.location.as_deref(), Some("Film.rating"));
        assert!(!output.has_errors());
    }

    #[test]
    fn test_unknown_scalar_parent_is_reported() {
        let output = generate(
            &unmapped(),
            &request(
                vec![
                    Type::record("films.Film", [("rating", Field::new("films.Rating"))]),
                    Type::scalar("films.Rating", &["films.Missing"]),
                ],
                "films.Film",
            ),
            &GenerateOptions::default(),
        );
        let model = &output.snippet(MODEL_LABEL).unwrap().content;
        assert!(model.contains("rating: any /* unknown type 'films.Missing' */"));
        assert!(output.has_errors());
        assert_eq!(output.errors.len(), 1);
        let diagnostic = &output.diagnostics[0];
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.location.as_deref(), Some("Film.rating"));
    }

    #[test]
    fn test_unknown_collection_element_is_reported_once() {
        let ratings: QualifiedName = "lang.taxi.Array<films.Rating>".parse().unwrap();
        let output = generate(
            &unmapped(),
            &request(
                vec![
                    Type::record("films.Film", [("ratings", Field::of(ratings.clone()))]),
                    Type::new(ratings, TypeKind::Collection(QualifiedName::new("films.Rating"))),
                ],
                "films.Film",
            ),
            &GenerateOptions::default(),
        );
        let model = &output.snippet(MODEL_LABEL).unwrap().content;
        assert!(model.contains("ratings: any /* unknown type 'films.Rating' */[]"));
        assert!(output.has_errors());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].location.as_deref(), Some("Film"));
    }

    #[test]
    fn test_direct_recursion_is_marked() {
        let film = Type::record(
            "films.Film",
            [
                ("sequel", Field::new("films.Film").nullable()),
                ("remakes", Field::of("lang.taxi.Array<films.Film>".parse().unwrap())),
            ],
        );
        let graph = TypeGraph::new(vec![film], Vec::new());
        let plan = EmissionPlan::build(&graph, &QualifiedName::new("films.Film"));
        let names = NameTable::new(plan.declarations(), unmapped().naming());
        let target = unmapped();
        let options = GenerateOptions::default();
        let mut ctx = Context {
            target: &target,
            graph: &graph,
            names: &names,
            recursive: &plan.recursive,
            options: &options,
            output: GenerationOutput::default(),
        };
        let film = graph.resolve(&QualifiedName::new("films.Film")).unwrap();
        let spec = ctx.struct_spec(film);
        assert_eq!(
            spec.fields[0].ty,
            TypeRef::optional(TypeRef::recursive(TypeRef::named("Film")))
        );
        assert_eq!(spec.fields[1].ty, TypeRef::array(TypeRef::named("Film")));
    }

    #[test]
    fn test_nullable_collections_and_enums() {
        let output = generate(
            &unmapped(),
            &request(
                vec![
                    Type::record(
                        "films.Film",
                        [
                            ("genre", Field::new("films.Genre").nullable()),
                            ("sequels", Field::of("lang.taxi.Array<films.Film>".parse().unwrap())),
                        ],
                    ),
                    Type::new(
                        QualifiedName::new("films.Genre"),
                        TypeKind::Enum(vec![EnumValue::new("Action"), EnumValue::new("Drama")]),
                    ),
                ],
                "films.Film",
            ),
            &GenerateOptions::default(),
        );
        let model = &output.snippet(MODEL_LABEL).unwrap().content;
        assert_eq!(
            model,
            "enum Genre { Action, Drama }\n\ntype Film {\n  genre?: Genre\n  sequels: Film[]\n}\n"
        );
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].severity, Severity::Info);
    }

    #[test]
    fn test_scalar_result_only_has_placeholders() {
        let output = generate(
            &unmapped(),
            &request(
                vec![Type::scalar("films.Title", &["lang.taxi.String"])],
                "films.Title",
            ),
            &GenerateOptions::default(),
        );
        let labels: Vec<&str> = output.snippets.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec![MODEL_LABEL, QUERY_LABEL]);
        assert_eq!(
            output.snippet(MODEL_LABEL).unwrap().content,
            "// unsupported primitive String: rendered as any\n"
        );
    }

    #[test]
    fn test_recognised_annotation_only_when_opted_in() {
        let film = Type::record(
            "films.Film",
            [(
                "filmId",
                Field::new("lang.taxi.Int").with_metadata(Metadata::new("films.Id")),
            )],
        );
        let output = generate(&unmapped(), &request(vec![film], "films.Film"), &GenerateOptions::default());
        assert!(!output.snippet(MODEL_LABEL).unwrap().content.contains("@id"));
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(&FormatSpec::new("yyyy")), Some("Format: `yyyy`".into()));
        assert_eq!(
            format_line(&FormatSpec::new("HH:mm").with_offset(-30)),
            Some("Format: `HH:mm` (UTC offset -30 minutes)".into())
        );
        assert_eq!(
            format_line(&FormatSpec {
                patterns: Vec::new(),
                offset: Some(60)
            }),
            Some("Format: (UTC offset +60 minutes)".into())
        );
    }

    #[test]
    fn test_mapped_primitives_of_unmapped_target() {
        assert!(mapped_primitives(&unmapped()).is_empty());
    }
}
