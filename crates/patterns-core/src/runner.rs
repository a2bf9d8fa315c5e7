//! Example runner
//!
//! Provides [`Runner`] for executing registered examples and comparing
//! their output against expected lines.

use crate::config::RunnerConfig;
use crate::error::CatalogError;
use crate::example::{Example, ExecutionResult, Lines};
use crate::registry::Registry;
use rayon::prelude::*;

/// Executes examples from a borrowed [`Registry`]
#[derive(Debug)]
pub struct Runner<'r> {
    registry: &'r Registry,
    config: RunnerConfig,
}

impl<'r> Runner<'r> {
    /// Create runner with default configuration
    #[inline]
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            config: RunnerConfig::default(),
        }
    }

    /// With configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Backing registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Run one named example
    ///
    /// # Errors
    /// - [`CatalogError::NotFound`] if the name is not registered
    /// - [`CatalogError::ExampleFailed`] if the example reports a failure
    pub fn run(&self, name: &str) -> Result<ExecutionResult, CatalogError> {
        let example = self.registry.get(name)?;
        execute(name, example)
    }

    /// Lazily run every example in registration order
    ///
    /// Each call starts over from the first example.
    pub fn run_all(&self) -> impl Iterator<Item = Result<ExecutionResult, CatalogError>> + 'r {
        self.registry
            .iter()
            .map(|(name, example)| execute(name, example))
    }

    /// Run every example on the rayon pool
    ///
    /// Results come back in registration order.
    #[must_use]
    pub fn run_all_parallel(&self) -> Vec<Result<ExecutionResult, CatalogError>> {
        let entries: Vec<(&str, &dyn Example)> = self.registry.iter().collect();
        entries
            .par_iter()
            .map(|(name, example)| execute(name, *example))
            .collect()
    }

    /// Run every example, in parallel if configured
    #[must_use]
    pub fn collect_all(&self) -> Vec<Result<ExecutionResult, CatalogError>> {
        if self.config.parallel {
            self.run_all_parallel()
        } else {
            self.run_all().collect()
        }
    }

    /// Run one example and compare against `expected`
    ///
    /// # Errors
    /// Same as [`Runner::run`]. A mismatch is not an error; inspect
    /// [`Verification::matches`].
    pub fn verify<S>(&self, name: &str, expected: &[S]) -> Result<Verification, CatalogError>
    where
        S: AsRef<str>,
    {
        let result = self.run(name)?;
        Ok(self.check(result, expected))
    }

    /// Compare an already captured `result` against `expected`
    #[must_use]
    pub fn check<S: AsRef<str>>(&self, result: ExecutionResult, expected: &[S]) -> Verification {
        let verification = Verification::new(result, expected);
        if let Some(line) = verification.first_mismatch {
            tracing::warn!(
                "Example '{}' diverged at line {}",
                verification.result.example_name,
                line
            );
        }
        verification
    }

    /// Render a result with the configured separator
    #[must_use]
    pub fn render(&self, result: &ExecutionResult) -> String {
        result.render(&self.config.separator)
    }
}

fn execute(name: &str, example: &dyn Example) -> Result<ExecutionResult, CatalogError> {
    tracing::debug!("Running example '{}'", name);
    match example.produce() {
        Ok(lines) => {
            tracing::debug!("Example '{}' produced {} lines", name, lines.len());
            Ok(ExecutionResult::new(name, lines))
        }
        Err(source) => {
            tracing::error!("Example '{}' failed: {}", name, source);
            Err(CatalogError::ExampleFailed {
                name: name.to_string(),
                source,
            })
        }
    }
}

/// Outcome of comparing a run against expected lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Captured run
    pub result: ExecutionResult,

    /// Lines the run was compared against
    pub expected: Lines,

    /// Index of the first differing line, `None` on a full match
    pub first_mismatch: Option<usize>,
}

impl Verification {
    /// Compare `result` against `expected`
    #[must_use]
    pub fn new<S: AsRef<str>>(result: ExecutionResult, expected: &[S]) -> Self {
        let first_mismatch = first_mismatch(&result.lines, expected);
        Self {
            expected: expected.iter().map(|s| s.as_ref().to_string()).collect(),
            result,
            first_mismatch,
        }
    }

    /// Check if every line matched
    #[inline]
    #[must_use]
    pub fn matches(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

fn first_mismatch<S: AsRef<str>>(actual: &[String], expected: &[S]) -> Option<usize> {
    let differing = actual
        .iter()
        .zip(expected)
        .position(|(a, e)| a != e.as_ref());

    differing.or_else(|| {
        (actual.len() != expected.len()).then(|| actual.len().min(expected.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExampleFailure;
    use crate::example::lines;

    fn greet() -> Result<Lines, ExampleFailure> {
        Ok(lines(["hello", "world"]))
    }

    fn broken() -> Result<Lines, ExampleFailure> {
        Err(ExampleFailure::new("setup missing"))
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register("greet", greet).unwrap();
        registry.register("broken", broken).unwrap();
        registry
    }

    #[test]
    fn run_named() {
        let registry = registry();
        let result = Runner::new(&registry).run("greet").unwrap();
        assert_eq!(result.example_name, "greet");
        assert_eq!(result.lines, vec!["hello", "world"]);
    }

    #[test]
    fn run_missing_is_not_found() {
        let registry = registry();
        let err = Runner::new(&registry).run("nonexistent").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref n) if n == "nonexistent"));
    }

    #[test]
    fn run_failure_is_wrapped_with_name() {
        let registry = registry();
        let err = Runner::new(&registry).run("broken").unwrap_err();
        match err {
            CatalogError::ExampleFailed { name, source } => {
                assert_eq!(name, "broken");
                assert_eq!(source.message(), "setup missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn run_all_in_order() {
        let registry = registry();
        let runner = Runner::new(&registry);
        let results: Vec<_> = runner.run_all().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().example_name, "greet");
        assert!(results[1].is_err());
    }

    #[test]
    fn parallel_matches_sequential_order() {
        let mut registry = Registry::new();
        for i in 0..32 {
            registry
                .register(format!("ex{i}"), move || -> Result<Lines, ExampleFailure> {
                    Ok(vec![i.to_string()])
                })
                .unwrap();
        }
        let runner = Runner::new(&registry);
        let names: Vec<_> = runner
            .run_all_parallel()
            .into_iter()
            .map(|r| r.unwrap().example_name)
            .collect();
        assert_eq!(names, registry.list_names());
    }

    #[test]
    fn collect_all_respects_parallel_flag() {
        let registry = registry();
        let sequential = Runner::new(&registry).collect_all();
        let parallel = Runner::new(&registry)
            .with_config(RunnerConfig::new().with_parallel(true))
            .collect_all();
        assert_eq!(sequential.len(), parallel.len());
        assert_eq!(
            sequential[0].as_ref().unwrap(),
            parallel[0].as_ref().unwrap()
        );
    }

    #[test]
    fn verify_match() {
        let registry = registry();
        let v = Runner::new(&registry)
            .verify("greet", &["hello", "world"])
            .unwrap();
        assert!(v.matches());
    }

    #[test]
    fn verify_reports_first_mismatch() {
        let registry = registry();
        let runner = Runner::new(&registry);

        let v = runner.verify("greet", &["hello", "there"]).unwrap();
        assert_eq!(v.first_mismatch, Some(1));

        let short = runner.verify("greet", &["hello"]).unwrap();
        assert_eq!(short.first_mismatch, Some(1));

        let long = runner.verify("greet", &["hello", "world", "!"]).unwrap();
        assert_eq!(long.first_mismatch, Some(2));
    }

    #[test]
    fn check_parallel_results() {
        let registry = registry();
        let runner = Runner::new(&registry).with_config(RunnerConfig::new().with_parallel(true));
        let result = runner.collect_all().remove(0).unwrap();
        let v = runner.check(result, &["hello", "world"]);
        assert!(v.matches());
        assert_eq!(v.result.example_name, "greet");
    }

    #[test]
    fn render_uses_config_separator() {
        let registry = registry();
        let runner = Runner::new(&registry).with_config(RunnerConfig::new().with_separator(" ~ "));
        let result = runner.run("greet").unwrap();
        assert_eq!(runner.render(&result), "greet: hello ~ world");
    }
}
