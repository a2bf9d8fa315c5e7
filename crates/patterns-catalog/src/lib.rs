//! Pattern Catalog
//!
//! Ten classic object-oriented design patterns, each a deterministic
//! demonstration that prints a fixed sequence of lines.
//!
//! # Patterns
//!
//! - [`patterns::singleton`]: init-once process-wide state
//! - [`patterns::factory`]: kind tag to trait object
//! - [`patterns::observer`]: ordered notification loop
//! - [`patterns::strategy`]: swappable algorithm
//! - [`patterns::command`]: requests as objects
//! - [`patterns::decorator`]: stacked wrappers
//! - [`patterns::adapter`]: interface translation
//! - [`patterns::proxy`]: lazy loading
//! - [`patterns::composite`]: uniform trees
//! - [`patterns::state`]: pure finite-state machine
//!
//! # Example
//!
//! ```rust
//! use patterns_catalog::builtin_registry;
//! use patterns_core::Runner;
//!
//! let registry = builtin_registry().unwrap();
//! let result = Runner::new(&registry).run("singleton").unwrap();
//! assert_eq!(result.lines, vec!["True"]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod console;
mod error;
pub mod patterns;

// Re-exports
pub use catalog::{builtin_registry, expected_lines, find, PatternInfo, ProduceFn, CATALOG};
pub use console::Console;
pub use error::PatternError;
