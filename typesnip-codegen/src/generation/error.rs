use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;
use typesnip_schema::{PrimitiveKind, SchemaError};

use super::{Diagnostic, Severity};

/// A failure isolated during generation.
///
/// None of these abort generation: the affected declaration or member is
/// replaced by a placeholder or an untyped fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum GenerationError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error("{language} has no mapping for primitive {kind}")]
    #[diagnostic(
        code(typesnip::unsupported_primitive),
        help("members of this primitive are rendered with the most generic type")
    )]
    UnsupportedPrimitive {
        language: String,
        kind: PrimitiveKind,
    },
}

impl GenerationError {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Schema(SchemaError::UnknownType { .. }) => Severity::Error,
            Self::Schema(SchemaError::CyclicInheritance { .. }) => Severity::Warning,
            Self::UnsupportedPrimitive { .. } => Severity::Warning,
        }
    }

    fn phase(&self) -> &'static str {
        match self {
            Self::Schema(SchemaError::UnknownType { .. }) => "plan",
            Self::Schema(SchemaError::CyclicInheritance { .. }) => "resolve",
            Self::UnsupportedPrimitive { .. } => "map",
        }
    }

    /// Convert into a [`Diagnostic`] at an optional location.
    pub fn to_diagnostic(&self, location: Option<&str>) -> Diagnostic {
        let diagnostic = match self.severity() {
            Severity::Error => Diagnostic::error(self.phase(), self.to_string()),
            Severity::Warning => Diagnostic::warning(self.phase(), self.to_string()),
            Severity::Info => Diagnostic::info(self.phase(), self.to_string()),
        };
        match location {
            Some(location) => diagnostic.at(location),
            None => diagnostic,
        }
    }
}
