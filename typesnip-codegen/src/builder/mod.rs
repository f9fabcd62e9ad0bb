//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`Indent`] - Indentation configuration
//! - [`StructSpec`], [`EnumSpec`] - Declarations to render
//! - [`StructureRenderer`] - Trait for language-specific declaration syntax
//! - [`TypeRef`] - Language-agnostic member types
//! - [`TypeMapper`] - Trait for language-specific type rendering

mod code_builder;
mod indent;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use structure::{EnumSpec, FieldSpec, StructSpec, StructureRenderer, VariantSpec};
pub use types::{TypeMapper, TypeRef};
