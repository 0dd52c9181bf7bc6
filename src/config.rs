//! Parser configuration with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{
    RouteError, RouteResult, DEFAULT_CHAIN_SEPARATOR, DEFAULT_HEADER_LINES, DEFAULT_MIN_LINES,
    DEFAULT_SENTINEL,
};

/// Knobs of the route file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Preamble lines skipped unconditionally
    pub header_lines: usize,

    /// Files with fewer lines are rejected as malformed
    pub min_lines: usize,

    /// Line prefix that ends layout detection and starts the data section
    pub sentinel: String,

    /// Separator between stops in a hyphen-chain token
    pub chain_separator: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
            min_lines: DEFAULT_MIN_LINES,
            sentinel: DEFAULT_SENTINEL.to_string(),
            chain_separator: DEFAULT_CHAIN_SEPARATOR,
        }
    }
}

impl ParserConfig {
    /// Load from TOML file
    pub fn load(path: &Path) -> RouteResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| RouteError::Config(e.to_string()))
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> RouteResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RouteError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> RouteResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
