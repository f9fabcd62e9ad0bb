//! Snippet generation.
//!
//! - [`generate`] - Request plus target in, snippets and diagnostics out
//! - [`EmissionPlan`] - Dependency-ordered declarations
//! - [`NameTable`] - Collision-free declaration names
//! - [`ImportCollector`] - Deduplicated imports
//! - [`Diagnostic`], [`GenerationError`] - Isolated failures

mod diagnostic;
mod error;
mod generator;
mod imports;
mod names;
mod plan;

pub use diagnostic::{Diagnostic, Severity};
pub use error::GenerationError;
pub use generator::{
    GenerateOptions, GeneratedSnippet, GenerationOutput, MODEL_LABEL, QUERY_LABEL, generate,
    mapped_primitives,
};
pub use imports::ImportCollector;
pub use names::NameTable;
pub use plan::{EmissionPlan, PlanEntry, RecursiveReference};
