//! Rust target for typesnip.
//!
//! Records become `serde` structs with snake_case fields, enums become
//! unit enums renamed to their wire values, and the query snippet awaits a
//! typed `client.query` call.

mod generator;
mod naming;
mod structure_renderer;
mod type_mapper;

pub use generator::RustTarget;
pub use naming::RUST_NAMING;
pub use structure_renderer::RustStructureRenderer;
pub use type_mapper::RustTypeMapper;
