//! TypeScript target for typesnip.
//!
//! Records become `export interface` declarations, enums become string
//! literal unions and streams are typed as rxjs `Observable`s.
//!
//! # Usage
//!
//! ```
//! use typesnip_codegen::{GenerateOptions, generate};
//! use typesnip_codegen_typescript::TypeScriptTarget;
//! use typesnip_schema::CodeGenRequest;
//!
//! let request: CodeGenRequest = r#"{
//!     "query": "find { Film }",
//!     "returnType": { "name": "films.Film" },
//!     "schema": { "types": [
//!         { "name": "films.Film", "attributes": { "title": { "type": "lang.taxi.String" } } }
//!     ] }
//! }"#
//! .parse()
//! .unwrap();
//!
//! let output = generate(&TypeScriptTarget::new(), &request, &GenerateOptions::default());
//! assert_eq!(
//!     output.snippets[0].content,
//!     "export interface Film {\n  title: string;\n}\n"
//! );
//! ```

mod generator;
mod naming;
mod structure_renderer;
mod type_mapper;

pub use generator::TypeScriptTarget;
pub use naming::TS_NAMING;
pub use structure_renderer::TypeScriptStructureRenderer;
pub use type_mapper::TypeScriptTypeMapper;
