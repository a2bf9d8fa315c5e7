//! Runner configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Separator placed between output lines when rendering a result
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Runner configuration
///
/// Loadable from TOML; missing keys fall back to [`RunnerConfig::default`].
///
/// ```toml
/// separator = " / "
/// parallel = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Line separator used by [`crate::Runner::render`]
    pub separator: String,
    /// Run every example on the rayon pool when running all
    pub parallel: bool,
}

impl RunnerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With line separator
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// With parallel execution
    #[inline]
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// [`ConfigError::InvalidToml`] on malformed input or unknown keys,
    /// [`ConfigError::EmptySeparator`] if the separator is empty.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`RunnerConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded runner config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Check invariants
    ///
    /// # Errors
    /// [`ConfigError::EmptySeparator`] if the separator is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            parallel: false,
        }
    }
}
