//! Generate model and query snippets from a query and its type graph.
//!
//! This crate wires the registered targets to the generation engine and
//! holds the operations behind the `typesnip` binary.
//!
//! ```
//! use typesnip::generate;
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
//! let output = generate(&request, "kotlin");
//! assert_eq!(output.snippets[0].content, "data class Film(\n    val title: String,\n)\n");
//! ```

pub mod language;
pub mod ops;
pub mod reports;

use typesnip_codegen::{GenerateOptions, GenerationOutput};
use typesnip_schema::CodeGenRequest;

pub use language::{Language, target, targets};

/// Generate snippets for one language id with default options.
pub fn generate(request: &CodeGenRequest, language: &str) -> GenerationOutput {
    generate_with(request, language, &GenerateOptions::default())
}

/// Generate snippets for one language id.
pub fn generate_with(
    request: &CodeGenRequest,
    language: &str,
    options: &GenerateOptions,
) -> GenerationOutput {
    typesnip_codegen::generate(target(language).as_ref(), request, options)
}
