//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how schema names become declaration and member names, and how
/// names that collide with the language are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a type's short name (e.g., "film_id" -> "FilmId")
    pub type_case: fn(&str) -> String,
    /// Transform an attribute name to a member name
    pub member_case: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Reserved words are legal member names without escaping
    pub reserved_members_allowed: bool,
    /// Escape a member name that is reserved or not an identifier
    pub escape_member: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name is a plain ASCII identifier.
    pub fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Transform and make safe for use as a declaration name.
    ///
    /// Reserved names get a `_` suffix; names that cannot start an
    /// identifier get a `_` prefix.
    pub fn type_name(&self, name: &str) -> String {
        let mut transformed = (self.type_case)(name);
        if !Self::is_identifier(&transformed) {
            transformed = format!(
                "_{}",
                transformed.replace(|c: char| !(c.is_ascii_alphanumeric() || c == '_'), "_")
            );
        }
        if self.is_reserved(&transformed) {
            transformed.push('_');
        }
        transformed
    }

    /// Transform and make safe for use as a member name.
    pub fn member_name(&self, name: &str) -> String {
        let transformed = (self.member_case)(name);
        let reserved = !self.reserved_members_allowed && self.is_reserved(&transformed);
        if reserved || !Self::is_identifier(&transformed) {
            (self.escape_member)(&transformed)
        } else {
            transformed
        }
    }
}

#[cfg(test)]
mod tests {
    use typesnip_core::to_pascal_case;

    use super::*;

    fn backticks(name: &str) -> String {
        format!("`{name}`")
    }

    fn verbatim(name: &str) -> String {
        name.to_string()
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        type_case: to_pascal_case,
        member_case: verbatim,
        reserved_words: &["class", "Object"],
        reserved_members_allowed: false,
        escape_member: backticks,
    };

    #[test]
    fn test_is_identifier() {
        assert!(NamingConvention::is_identifier("filmId"));
        assert!(NamingConvention::is_identifier("_private"));
        assert!(!NamingConvention::is_identifier("2ndTitle"));
        assert!(!NamingConvention::is_identifier("release-date"));
        assert!(!NamingConvention::is_identifier(""));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(TEST_NAMING.type_name("film"), "Film");
        assert_eq!(TEST_NAMING.type_name("object"), "Object_");
        assert_eq!(TEST_NAMING.type_name("2ndFilm"), "_2ndFilm");
    }

    #[test]
    fn test_member_name() {
        assert_eq!(TEST_NAMING.member_name("title"), "title");
        assert_eq!(TEST_NAMING.member_name("class"), "`class`");
        assert_eq!(TEST_NAMING.member_name("release-date"), "`release-date`");

        let allowed = NamingConvention {
            reserved_members_allowed: true,
            ..TEST_NAMING
        };
        assert_eq!(allowed.member_name("class"), "class");
    }
}
