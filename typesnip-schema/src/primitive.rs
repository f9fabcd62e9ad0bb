use std::fmt;

use serde::Serialize;

const TAXI_NAMESPACE: &str = "lang.taxi";

/// Built-in types every inheritance chain ends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PrimitiveKind {
    String,
    Int,
    Decimal,
    Double,
    Boolean,
    Date,
    Time,
    DateTime,
    Instant,
    Any,
    Void,
    Array,
    Stream,
}

impl PrimitiveKind {
    /// Every kind a language maps to a built-in type.
    pub const SCALARS: [PrimitiveKind; 11] = [
        Self::String,
        Self::Int,
        Self::Decimal,
        Self::Double,
        Self::Boolean,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Instant,
        Self::Any,
        Self::Void,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::Instant => "Instant",
            Self::Any => "Any",
            Self::Void => "Void",
            Self::Array => "Array",
            Self::Stream => "Stream",
        }
    }

    /// Recognise a built-in from a fully qualified name, either in the
    /// `lang.taxi` namespace or bare.
    pub fn from_name(fully_qualified_name: &str) -> Option<Self> {
        let short = match fully_qualified_name.rsplit_once('.') {
            Some((TAXI_NAMESPACE, short)) => short,
            Some(_) => return None,
            None => fully_qualified_name,
        };
        let kind = match short {
            "String" => Self::String,
            "Int" => Self::Int,
            "Decimal" => Self::Decimal,
            "Double" => Self::Double,
            "Boolean" => Self::Boolean,
            "Date" => Self::Date,
            "Time" => Self::Time,
            "DateTime" => Self::DateTime,
            "Instant" => Self::Instant,
            "Any" => Self::Any,
            "Void" => Self::Void,
            "Array" => Self::Array,
            "Stream" => Self::Stream,
            _ => return None,
        };
        Some(kind)
    }

    /// Array and Stream wrap an element type.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Array | Self::Stream)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(
            PrimitiveKind::from_name("lang.taxi.Int"),
            Some(PrimitiveKind::Int)
        );
        assert_eq!(
            PrimitiveKind::from_name("Instant"),
            Some(PrimitiveKind::Instant)
        );
        assert_eq!(
            PrimitiveKind::from_name("lang.taxi.Array"),
            Some(PrimitiveKind::Array)
        );
        assert_eq!(PrimitiveKind::from_name("films.String"), None);
        assert_eq!(PrimitiveKind::from_name("lang.taxi.Long"), None);
    }

    #[test]
    fn test_round_trips_through_display() {
        for kind in PrimitiveKind::SCALARS {
            assert_eq!(PrimitiveKind::from_name(&kind.to_string()), Some(kind));
            assert!(!kind.is_structural());
        }
    }
}
