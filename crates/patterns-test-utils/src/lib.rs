//! Testing utilities for the pattern demos workspace
//!
//! Shared fixtures and assertions.

#![allow(missing_docs)]

use patterns_core::{lines, Example, ExampleFailure, ExecutionResult, Lines, Registry};

/// Example that always prints `output`
pub fn fixed_example(output: &'static [&'static str]) -> impl Example + 'static {
    move || -> Result<Lines, ExampleFailure> { Ok(lines(output.iter().copied())) }
}

/// Example that always fails with `message`
pub fn failing_example(message: &'static str) -> impl Example + 'static {
    move || -> Result<Lines, ExampleFailure> { Err(ExampleFailure::new(message)) }
}

/// Registry of fixed examples, registered in slice order
pub fn registry_of(entries: &[(&str, &'static [&'static str])]) -> Registry {
    let mut registry = Registry::new();
    for (name, output) in entries {
        registry.register(*name, fixed_example(*output)).unwrap();
    }
    registry
}

/// Assert captured lines equal `expected`, with a readable diff on failure
#[track_caller]
pub fn assert_lines(actual: &[String], expected: &[&str]) {
    let actual: Vec<&str> = actual.iter().map(String::as_str).collect();
    pretty_assertions::assert_eq!(actual, expected);
}

/// Assert a result came from `name` and printed `expected`
#[track_caller]
pub fn assert_result(result: &ExecutionResult, name: &str, expected: &[&str]) {
    pretty_assertions::assert_eq!(result.example_name, name);
    assert_lines(&result.lines, expected);
}
