//! Indentation width of generated snippets.

const SPACES: &str = "    ";

/// Number of spaces per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// Rust and Kotlin.
    pub const RUST: Self = Self(4);

    /// TypeScript and the neutral fallback syntax.
    pub const TYPESCRIPT: Self = Self(2);

    /// One indentation level.
    pub fn as_str(&self) -> &'static str {
        &SPACES[..self.0 as usize]
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(Indent::TYPESCRIPT.as_str(), "  ");
        assert_eq!(Indent::RUST.as_str(), "    ");
        assert_eq!(Indent::default(), Indent::RUST);
    }
}
