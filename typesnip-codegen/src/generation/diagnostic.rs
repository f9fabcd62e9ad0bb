//! Diagnostics collected while generating snippets.
//!
//! Generation never aborts on bad input. Each isolated failure becomes a
//! [`Diagnostic`] next to the snippets, so callers can show them without
//! matching on error types.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Part of the output was replaced by a placeholder.
    Error,
    /// Output was produced with a fallback.
    Warning,
    /// Informational message about the generated output.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from one generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The step that produced this diagnostic ("plan", "resolve", "map").
    pub phase: String,
    pub message: String,
    /// Where in the output it applies (e.g., "Film.title").
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("plan", "unknown type 'films.Studio'");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "plan");
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("resolve", "cyclic inheritance").at("Film.rating");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.location.as_deref(), Some("Film.rating"));
        assert_eq!(diag.to_string(), "warning: cyclic inheritance (at Film.rating)");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
