//! `typesnip.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// The `[generate]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Targets used when no `--language` is given
    pub languages: Vec<String>,
    /// Identifier of the client object in query snippets
    pub client: String,
    /// Render type docs and formats as doc comments
    pub docs: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            languages: vec!["typescript".to_string()],
            client: "client".to_string(),
            docs: true,
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "typesnip.toml";

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        content
            .parse::<Self>()
            .wrap_err_with(|| format!("invalid config in {}", path.display()))
    }

    /// Load an explicitly given config file, or `typesnip.toml` in `dir` if
    /// present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate: PathBuf = dir.join(Self::FILE_NAME);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
