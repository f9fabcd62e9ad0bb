//! Check operation - request validation.

use tracing::debug;
use typesnip_codegen::generation::{Diagnostic, EmissionPlan, GenerationError, PlanEntry};
use typesnip_schema::{CodeGenRequest, TypeKind};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Plans the declarations of the query's result and resolves the primitive
/// of every scalar in the graph, collecting what would be degraded.
pub fn check(request: &CodeGenRequest, request_path: &str) -> CheckReport {
    let graph = &request.graph;
    let plan = EmissionPlan::build(graph, &request.return_type);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut push = |diagnostic: Diagnostic| {
        if !diagnostics.iter().any(|d| d.message == diagnostic.message) {
            diagnostics.push(diagnostic);
        }
    };

    for err in &plan.errors {
        let location = plan.entries.iter().find_map(|entry| match entry {
            PlanEntry::Missing {
                name,
                referenced_by,
            } if name == err.type_name() => referenced_by.as_deref(),
            _ => None,
        });
        push(GenerationError::from(err.clone()).to_diagnostic(location));
    }

    for ty in graph.types() {
        if !matches!(ty.kind, TypeKind::Scalar { .. }) {
            continue;
        }
        if let Err(err) = graph.base_primitive(ty) {
            let location = ty.name.parameterized_name();
            push(GenerationError::from(err).to_diagnostic(Some(location.as_str())));
        }
    }

    for reference in &plan.recursive {
        push(
            Diagnostic::info("plan", format!("{} is referenced recursively", reference.to))
                .at(reference.from.as_str()),
        );
    }

    debug!(
        types = graph.len(),
        diagnostics = diagnostics.len(),
        "checked request"
    );

    CheckReport {
        request_path: request_path.to_string(),
        return_type: request.return_type.parameterized_name(),
        type_count: graph.len(),
        declarations: plan
            .declarations()
            .map(|ty| ty.name.parameterized_name())
            .collect(),
        services: graph
            .services()
            .iter()
            .map(|service| (service.name.to_string(), service.operations.len()))
            .collect(),
        diagnostics,
    }
}
