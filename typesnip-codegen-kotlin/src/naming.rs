//! Kotlin-specific naming conventions.

use typesnip_codegen::language::NamingConvention;
use typesnip_core::to_pascal_case;

fn verbatim(name: &str) -> String {
    name.to_string()
}

fn backticks(name: &str) -> String {
    format!("`{}`", name.replace('`', ""))
}

/// Kotlin naming conventions.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    type_case: to_pascal_case,
    // Properties keep the attribute name so they bind to the payload
    member_case: verbatim,
    reserved_words: &[
        // Hard keywords
        "as",
        "break",
        "class",
        "continue",
        "do",
        "else",
        "false",
        "for",
        "fun",
        "if",
        "in",
        "interface",
        "is",
        "null",
        "object",
        "package",
        "return",
        "super",
        "this",
        "throw",
        "true",
        "try",
        "typealias",
        "typeof",
        "val",
        "var",
        "when",
        "while",
        // Types the generated code refers to
        "Any",
        "Boolean",
        "Double",
        "Flow",
        "Int",
        "List",
        "Nothing",
        "String",
        "Unit",
    ],
    reserved_members_allowed: false,
    escape_member: backticks,
};
