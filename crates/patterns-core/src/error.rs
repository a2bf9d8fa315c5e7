//! Error types for the example harness
//!
//! Provides error handling for:
//! - Registration conflicts
//! - Lookups of unknown examples
//! - Failures raised from inside an example
//! - Runner configuration loading

use std::path::PathBuf;

/// Main harness error type
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An example with this name is already registered
    #[error("duplicate example name: {0}")]
    DuplicateName(String),

    /// No example is registered under this name
    #[error("example not found: {0}")]
    NotFound(String),

    /// The example itself reported a violated precondition
    #[error("example '{name}' failed: {source}")]
    ExampleFailed {
        /// Name the example was registered under
        name: String,
        /// Failure reported by the example
        source: ExampleFailure,
    },
}

impl CatalogError {
    /// Check if the error is a lookup miss
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Registration errors point at a broken harness setup, not user input
    #[inline]
    #[must_use]
    pub fn is_programming_error(&self) -> bool {
        matches!(self, Self::DuplicateName(_))
    }

    /// Name of the example the error refers to
    #[must_use]
    pub fn example_name(&self) -> &str {
        match self {
            Self::DuplicateName(name) | Self::NotFound(name) => name,
            Self::ExampleFailed { name, .. } => name,
        }
    }
}

/// Raised by an example whose internal invariant was violated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ExampleFailure {
    message: String,
}

impl ExampleFailure {
    /// Create failure with message
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Failure message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Runner configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::RunnerConfig`]
    #[error("invalid config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Separator must not be empty
    #[error("separator must not be empty")]
    EmptySeparator,
}
