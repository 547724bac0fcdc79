//! Scanner configuration.
//!
//! [`ScanConfig`] selects between strict error reporting and the permissive
//! fallback, and toggles the compatibility switches that reproduce the legacy
//! scanner's handling of `:`, `[`/`]` and single-quoted strings. It can be
//! stored as TOML:
//!
//! ```toml
//! strict = true
//! colon_as_dot = false
//! bracket_requires_eq = false
//! symmetric_quotes = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Conventional file name for a scanner configuration.
pub const CONFIG_FILE_NAME: &str = "recq-lex.toml";

/// Options controlling how the scanner classifies input.
///
/// Every field has a default, so a partial (or empty) TOML document is a
/// valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Report lexical errors as `Err(LexError)`.
    ///
    /// When false, unknown characters come back as `Eof`-kind tokens
    /// carrying the character, and unterminated strings and comments run
    /// silently to end of input.
    #[serde(default = "default_true")]
    pub strict: bool,

    /// Emit `:` as a `Dot` token with text `.`.
    #[serde(default)]
    pub colon_as_dot: bool,

    /// Only tokenize `[` and `]` when directly followed by `=`.
    #[serde(default)]
    pub bracket_requires_eq: bool,

    /// Close a string on the quote that opened it. When false, strings
    /// close only on `"`.
    #[serde(default = "default_true")]
    pub symmetric_quotes: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strict: true,
            colon_as_dot: false,
            bracket_requires_eq: false,
            symmetric_quotes: true,
        }
    }
}

impl ScanConfig {
    /// Returns the configuration that reproduces the legacy scanner.
    ///
    /// # Example
    ///
    /// ```
    /// use recq_lex::ScanConfig;
    ///
    /// let legacy = ScanConfig::legacy();
    /// assert!(!legacy.strict);
    /// assert!(legacy.colon_as_dot);
    /// ```
    pub fn legacy() -> Self {
        Self {
            strict: false,
            colon_as_dot: true,
            bracket_requires_eq: true,
            symmetric_quotes: false,
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<ScanConfig, ConfigError>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(PathBuf::from(path)));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        tracing::debug!(path = %path.display(), ?config, "loaded scanner configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// Missing parent directories are created.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
