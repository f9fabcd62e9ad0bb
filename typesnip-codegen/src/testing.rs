//! Shared fixtures for target tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use typesnip_schema::CodeGenRequest;

use crate::{GenerateOptions, GenerationOutput, LanguageCodegen, generate};

/// A film catalog query returning `Film[]`. Every field is a scalar that
/// resolves to a primitive through its parents.
pub const FILM_REQUEST: &str = include_str!("../tests/fixtures/film_request.json");

/// A stream of release announcements: nullable and annotated fields, an
/// anonymous projection, an enum, a missing type and a cyclic scalar.
pub const RELEASES_REQUEST: &str = include_str!("../tests/fixtures/releases_request.json");

pub fn film_request() -> CodeGenRequest {
    CodeGenRequest::from_str_with_filename(FILM_REQUEST, "film_request.json")
        .expect("film fixture parses")
}

pub fn releases_request() -> CodeGenRequest {
    CodeGenRequest::from_str_with_filename(RELEASES_REQUEST, "releases_request.json")
        .expect("releases fixture parses")
}

/// Generate with default options.
pub fn generate_default(target: &dyn LanguageCodegen, request: &CodeGenRequest) -> GenerationOutput {
    generate(target, request, &GenerateOptions::default())
}

/// Content of a snippet, panicking when it is absent.
pub fn snippet<'a>(output: &'a GenerationOutput, label: &str) -> &'a str {
    match output.snippet(label) {
        Some(snippet) => &snippet.content,
        None => panic!("no {label} snippet in {:?}", output.snippets),
    }
}

/// Asserts that each name is declared, and in the given order.
///
/// `marker` turns a name into the text that opens its declaration (e.g.,
/// `|n| format!("interface {n} ")`).
pub fn assert_declared_in_order(content: &str, names: &[&str], marker: impl Fn(&str) -> String) {
    let mut last = 0;
    for name in names {
        let needle = marker(name);
        let Some(position) = content.find(&needle) else {
            panic!("{needle:?} is not declared in:\n{content}");
        };
        assert!(
            position >= last,
            "{needle:?} is declared out of order in:\n{content}"
        );
        last = position;
    }
}
