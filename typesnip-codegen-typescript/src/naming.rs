//! TypeScript-specific naming conventions.

use typesnip_codegen::language::NamingConvention;
use typesnip_core::to_pascal_case;

/// Members keep the attribute name so they match the JSON payload.
fn verbatim(name: &str) -> String {
    name.to_string()
}

fn quote(name: &str) -> String {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Types use PascalCase
    type_case: to_pascal_case,
    member_case: verbatim,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Predefined type names
        "Any",
        "Array",
        "Boolean",
        "Date",
        "Function",
        "Number",
        "Object",
        "Observable",
        "Promise",
        "String",
        "Symbol",
    ],
    // Property names may be reserved words
    reserved_members_allowed: true,
    escape_member: quote,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming_type() {
        assert_eq!(TS_NAMING.type_name("film_release"), "FilmRelease");
        assert_eq!(TS_NAMING.type_name("Date"), "Date_");
        assert_eq!(TS_NAMING.type_name("3dFilm"), "_3dFilm");
    }

    #[test]
    fn test_ts_naming_member() {
        assert_eq!(TS_NAMING.member_name("filmId"), "filmId");
        assert_eq!(TS_NAMING.member_name("class"), "class");
        assert_eq!(TS_NAMING.member_name("release-date"), "'release-date'");
        assert_eq!(TS_NAMING.member_name("it's"), "'it\\'s'");
    }

    #[test]
    fn test_ts_reserved_words() {
        assert!(TS_NAMING.is_reserved("class"));
        assert!(TS_NAMING.is_reserved("Promise"));
        assert!(!TS_NAMING.is_reserved("Film"));
    }
}
