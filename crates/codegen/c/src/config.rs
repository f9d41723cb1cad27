//! Output formatting options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid codegen config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Separators used when rendering a target tree.
///
/// The defaults render one bare call per line with `", "` between
/// arguments. Missing keys in TOML fall back to the defaults:
///
/// ```toml
/// statement_terminator = ";"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Placed between top-level statements.
    pub statement_separator: String,
    /// Placed between call arguments.
    pub argument_separator: String,
    /// Appended to every `ExpressionStatement`.
    pub statement_terminator: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            statement_separator: "\n".to_string(),
            argument_separator: ", ".to_string(),
            statement_terminator: String::new(),
        }
    }
}

impl CodegenConfig {
    /// Load a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
