//! Example contract and execution result
//!
//! Provides the [`Example`] trait, the single capability every pattern
//! demonstration implements.

use crate::error::ExampleFailure;
use serde::{Deserialize, Serialize};

/// Ordered output lines of one example run
pub type Lines = Vec<String>;

/// A self-contained demonstration producing observable output lines
///
/// # Contract
/// `produce()` takes no external input, is deterministic, terminates, and
/// returns events in program order. Any state the demonstration needs is
/// created inside the call.
pub trait Example: Send + Sync {
    /// Run the demonstration and capture its output
    ///
    /// # Errors
    /// Returns [`ExampleFailure`] if an invariant the demonstration relies
    /// on is violated.
    fn produce(&self) -> Result<Lines, ExampleFailure>;
}

impl<F> Example for F
where
    F: Fn() -> Result<Lines, ExampleFailure> + Send + Sync,
{
    #[inline]
    fn produce(&self) -> Result<Lines, ExampleFailure> {
        self()
    }
}

/// Collect anything string-like into [`Lines`]
pub fn lines<I, S>(items: I) -> Lines
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// Captured output of a single example run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Name the example was registered under
    pub example_name: String,

    /// Output lines in emission order
    pub lines: Lines,
}

impl ExecutionResult {
    /// Create result
    #[inline]
    pub fn new(example_name: impl Into<String>, lines: Lines) -> Self {
        Self {
            example_name: example_name.into(),
            lines,
        }
    }

    /// Render as `name: line1<sep>line2<sep>...`
    #[must_use]
    pub fn render(&self, separator: &str) -> String {
        if self.lines.is_empty() {
            format!("{}:", self.example_name)
        } else {
            format!("{}: {}", self.example_name, self.lines.join(separator))
        }
    }
}
