//! Pattern Demo Harness
//!
//! Registers named, self-contained demonstrations and runs them, capturing
//! their output as ordered lines.
//!
//! # Core Concepts
//!
//! - [`Example`]: Single-method capability every demonstration implements
//! - [`Registry`]: Insertion-ordered, name-unique collection of examples
//! - [`Runner`]: Executes one or all examples and verifies their output
//! - [`ExecutionResult`]: Captured lines of one run
//! - [`RunnerConfig`]: Rendering and execution options
//!
//! # Example
//!
//! ```rust
//! use patterns_core::{lines, ExampleFailure, Lines, Registry, Runner};
//!
//! fn hello() -> Result<Lines, ExampleFailure> {
//!     Ok(lines(["hello"]))
//! }
//!
//! let mut registry = Registry::new();
//! registry.register("hello", hello).unwrap();
//!
//! let runner = Runner::new(&registry);
//! let result = runner.run("hello").unwrap();
//! assert_eq!(runner.render(&result), "hello: hello");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod example;
mod registry;
mod runner;

// Re-exports
pub use config::{RunnerConfig, DEFAULT_SEPARATOR};
pub use error::{CatalogError, ConfigError, ExampleFailure};
pub use example::{lines, Example, ExecutionResult, Lines};
pub use registry::Registry;
pub use runner::{Runner, Verification};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
