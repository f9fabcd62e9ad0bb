//! Rust-specific naming conventions.

use typesnip_codegen::language::NamingConvention;
use typesnip_core::{to_pascal_case, to_snake_case};

/// Keywords that cannot be raw identifiers.
const NOT_RAW: &[&str] = &["self", "Self", "super", "crate"];

fn escape_rust_member(name: &str) -> String {
    if NOT_RAW.contains(&name) {
        format!("{name}_")
    } else if NamingConvention::is_identifier(name) {
        format!("r#{name}")
    } else {
        format!(
            "_{}",
            name.replace(|c: char| !(c.is_ascii_alphanumeric() || c == '_'), "_")
        )
    }
}

/// Variant names: `SCI_FI` and `sci-fi` both become `SciFi`.
pub(crate) fn variant_name(name: &str) -> String {
    let screaming = name.chars().any(|c| c.is_ascii_uppercase())
        && !name.chars().any(|c| c.is_ascii_lowercase());
    let name = if screaming || name.contains(['_', '-', ' ', '.']) {
        to_pascal_case(&name.to_lowercase())
    } else {
        to_pascal_case(name)
    };
    RUST_NAMING.type_name(&name)
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    type_case: to_pascal_case,
    member_case: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
        // Prelude and imported types the snippets use
        "Option", "Vec", "Box", "String", "DateTime", "Utc", "NaiveDate", "NaiveTime",
        "NaiveDateTime", "Decimal", "Value", "Serialize", "Deserialize",
    ],
    reserved_members_allowed: false,
    escape_member: escape_rust_member,
};
