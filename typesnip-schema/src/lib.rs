//! Type graph model for the typesnip snippet generator.
//!
//! A [`CodeGenRequest`] is parsed from the JSON wire format, lowered into
//! closed [`TypeKind`] variants and normalized into an immutable
//! [`TypeGraph`]. Everything after parsing is pure lookup.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod graph;
mod lower;
mod model;
mod name;
mod primitive;
mod request;
mod wire;

pub use error::{Error, Result, SchemaError, SourceContext};
pub use graph::{ResolvedField, TypeGraph};
pub use model::{
    EnumValue, Field, FormatSpec, Metadata, Operation, Parameter, Service, Source, Type, TypeKind,
};
pub use name::{NameError, QualifiedName};
pub use primitive::PrimitiveKind;
pub use request::CodeGenRequest;
