//! Shared snippet generation engine for typesnip.
//!
//! This crate turns a [`CodeGenRequest`](typesnip_schema::CodeGenRequest)
//! into `model` and `query` snippets. Traversal, planning and naming are
//! shared; language crates (e.g., `typesnip-codegen-typescript`) only
//! implement [`LanguageCodegen`](language::LanguageCodegen).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, StructSpec, TypeMapper, etc.)
//! - [`generation`] - The generator, emission plan, naming, imports and diagnostics
//! - [`language`] - Language abstractions (LanguageCodegen, NamingConvention, UnmappedTarget)
//! - [`testing`] - Shared request fixtures (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use generation::{GenerateOptions, GeneratedSnippet, GenerationOutput, generate};
pub use language::LanguageCodegen;
