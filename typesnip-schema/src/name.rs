use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A possibly parameterized, namespaced type name.
///
/// `lang.taxi.Array<films.Film>` has namespace `lang.taxi`, short name
/// `Array` and one parameter `films.Film`. Type identity is the
/// [parameterized name](QualifiedName::parameterized_name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    fully_qualified_name: String,
    namespace: String,
    name: String,
    parameters: Vec<QualifiedName>,
}

/// A type name string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type name '{name}': {reason}")]
pub struct NameError {
    pub name: String,
    pub reason: &'static str,
}

impl QualifiedName {
    /// Create a name without parameters. The namespace is everything before
    /// the last `.`.
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        let fully_qualified_name = fully_qualified_name.into();
        let (namespace, name) = match fully_qualified_name.rsplit_once('.') {
            Some((namespace, name)) => (namespace.to_string(), name.to_string()),
            None => (String::new(), fully_qualified_name.clone()),
        };
        Self {
            fully_qualified_name,
            namespace,
            name,
            parameters: Vec::new(),
        }
    }

    /// Replace the type parameters.
    pub fn with_parameters(mut self, parameters: Vec<QualifiedName>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Override the derived namespace and short name.
    pub(crate) fn with_parts(mut self, namespace: Option<String>, name: Option<String>) -> Self {
        if let Some(namespace) = namespace {
            self.namespace = namespace;
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        self
    }

    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The short name, without namespace or parameters.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[QualifiedName] {
        &self.parameters
    }

    /// The identity key: `namespace.Name<P1,P2>`.
    pub fn parameterized_name(&self) -> String {
        if self.parameters.is_empty() {
            return self.fully_qualified_name.clone();
        }
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(QualifiedName::parameterized_name)
            .collect();
        format!("{}<{}>", self.fully_qualified_name, params.join(","))
    }

    /// Visit this name and every nested parameter, outermost first.
    pub fn walk(&self, visit: &mut impl FnMut(&QualifiedName)) {
        visit(self);
        for param in &self.parameters {
            param.walk(visit);
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parameterized_name())
    }
}

impl FromStr for QualifiedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(s.trim(), s)
    }
}

fn parse_name(s: &str, original: &str) -> Result<QualifiedName, NameError> {
    let error = |reason| NameError {
        name: original.to_string(),
        reason,
    };

    let Some(open) = s.find('<') else {
        if s.contains('>') || s.contains(',') {
            return Err(error("unexpected '>' or ','"));
        }
        if s.is_empty() {
            return Err(error("name is empty"));
        }
        return Ok(QualifiedName::new(s));
    };

    if !s.ends_with('>') {
        return Err(error("unclosed '<'"));
    }
    let base = s[..open].trim();
    if base.is_empty() {
        return Err(error("name is empty"));
    }
    let inner = &s[open + 1..s.len() - 1];

    let mut parameters = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1).ok_or_else(|| error("unbalanced '>'"))?;
            }
            ',' if depth == 0 => {
                parameters.push(parse_name(inner[start..i].trim(), original)?);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(error("unclosed '<'"));
    }
    parameters.push(parse_name(inner[start..].trim(), original)?);

    Ok(QualifiedName::new(base).with_parameters(parameters))
}

/// Wire form: either a plain string or an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireName {
    Plain(String),
    Object(NameObject),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NameObject {
    fully_qualified_name: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    parameters: Vec<QualifiedName>,
    #[serde(default)]
    parameterized_name: Option<String>,
}

impl<'de> Deserialize<'de> for QualifiedName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        match WireName::deserialize(deserializer)? {
            WireName::Plain(s) => s.parse().map_err(D::Error::custom),
            WireName::Object(obj) => {
                // Some producers only fill in the parameterized form
                if obj.parameters.is_empty()
                    && let Some(parameterized) = obj.parameterized_name.filter(|p| p.contains('<'))
                {
                    return parameterized.parse().map_err(D::Error::custom);
                }
                let base: QualifiedName = obj.fully_qualified_name.parse().map_err(D::Error::custom)?;
                let parameters = if obj.parameters.is_empty() {
                    base.parameters.clone()
                } else {
                    obj.parameters
                };
                Ok(base
                    .with_parameters(parameters)
                    .with_parts(obj.namespace, obj.name))
            }
        }
    }
}

impl Serialize for QualifiedName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.parameterized_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_namespace() {
        let name = QualifiedName::new("films.reviews.ReviewScore");
        assert_eq!(name.namespace(), "films.reviews");
        assert_eq!(name.name(), "ReviewScore");
        assert_eq!(name.parameterized_name(), "films.reviews.ReviewScore");
    }

    #[test]
    fn test_new_without_namespace() {
        let name = QualifiedName::new("AnonymousProjectedTypeX1");
        assert_eq!(name.namespace(), "");
        assert_eq!(name.name(), "AnonymousProjectedTypeX1");
    }

    #[test]
    fn test_parse_parameterized() {
        let name: QualifiedName = "lang.taxi.Array<films.Film>".parse().unwrap();
        assert_eq!(name.fully_qualified_name(), "lang.taxi.Array");
        assert_eq!(name.name(), "Array");
        assert_eq!(name.parameters().len(), 1);
        assert_eq!(name.parameters()[0].name(), "Film");
        assert_eq!(name.to_string(), "lang.taxi.Array<films.Film>");
    }

    #[test]
    fn test_parse_nested_and_multiple() {
        let name: QualifiedName = "demo.Pair<lang.taxi.Array<demo.A>, demo.B>".parse().unwrap();
        assert_eq!(name.parameters().len(), 2);
        assert_eq!(
            name.parameters()[0].parameterized_name(),
            "lang.taxi.Array<demo.A>"
        );
        assert_eq!(
            name.parameterized_name(),
            "demo.Pair<lang.taxi.Array<demo.A>,demo.B>"
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<QualifiedName>().is_err());
        assert!("lang.taxi.Array<films.Film".parse::<QualifiedName>().is_err());
        assert!("lang.taxi.Array<films.Film>>".parse::<QualifiedName>().is_err());
        assert!("a,b".parse::<QualifiedName>().is_err());
    }

    #[test]
    fn test_deserialize_string() {
        let name: QualifiedName = serde_json::from_str(r#""films.Film""#).unwrap();
        assert_eq!(name, QualifiedName::new("films.Film"));
    }

    #[test]
    fn test_deserialize_object() {
        let name: QualifiedName = serde_json::from_str(
            r#"{
                "fullyQualifiedName": "lang.taxi.Array",
                "name": "Array",
                "namespace": "lang.taxi",
                "parameters": [{ "fullyQualifiedName": "films.Film", "parameters": [] }],
                "parameterizedName": "lang.taxi.Array<films.Film>"
            }"#,
        )
        .unwrap();
        assert_eq!(name.parameterized_name(), "lang.taxi.Array<films.Film>");
    }

    #[test]
    fn test_deserialize_object_from_parameterized_name() {
        let name: QualifiedName = serde_json::from_str(
            r#"{ "fullyQualifiedName": "lang.taxi.Array", "parameterizedName": "lang.taxi.Array<films.Film>" }"#,
        )
        .unwrap();
        assert_eq!(name.parameters()[0].fully_qualified_name(), "films.Film");
    }

    #[test]
    fn test_walk_visits_parameters() {
        let name: QualifiedName = "lang.taxi.Array<lang.taxi.Array<films.Film>>".parse().unwrap();
        let mut seen = Vec::new();
        name.walk(&mut |n| seen.push(n.parameterized_name()));
        assert_eq!(
            seen,
            vec![
                "lang.taxi.Array<lang.taxi.Array<films.Film>>",
                "lang.taxi.Array<films.Film>",
                "films.Film",
            ]
        );
    }
}
