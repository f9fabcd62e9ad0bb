//! Core utilities and types for the typesnip snippet generator.
//!
//! This crate provides the small building blocks shared by the schema
//! model, the generators and the CLI: case conversion, file writing and
//! the `typesnip.toml` configuration.

mod config;
mod file;
mod utils;

// Configuration
pub use config::{Config, GenerateConfig};
// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{to_camel_case, to_pascal_case, to_snake_case};
