//! Command-line front end for the pattern catalog
//!
//! `pattern-demo [NAME]` runs one example, or every example when no name
//! is given, and prints `name: line1 | line2 | ...` per result.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use patterns_catalog::{expected_lines, find};
use patterns_core::{CatalogError, ExecutionResult, Registry, Runner, RunnerConfig};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the argument parser
#[must_use]
pub fn build_cli() -> Command {
    Command::new("pattern-demo")
        .version(patterns_core::VERSION)
        .about("Run the design pattern demonstrations")
        .arg(
            Arg::new("name")
                .value_name("NAME")
                .help("Example to run; runs every example when omitted"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .conflicts_with("name")
                .help("List registered examples"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .action(ArgAction::SetTrue)
                .conflicts_with("list")
                .help("Compare output against the documented lines"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["list", "verify"])
                .help("Output results as JSON"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Run every example on the thread pool"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .value_name("SEP")
                .help("Separator placed between output lines"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML runner configuration"),
        )
}

/// Parsed command-line options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Single example to run
    pub name: Option<String>,
    /// List instead of run
    pub list: bool,
    /// Verify against documented output
    pub verify: bool,
    /// Emit JSON
    pub json: bool,
    /// Force parallel execution
    pub parallel: bool,
    /// Separator override
    pub separator: Option<String>,
    /// Config file
    pub config: Option<PathBuf>,
}

impl Options {
    /// Extract options from parsed matches
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            name: matches.get_one::<String>("name").cloned(),
            list: matches.get_flag("list"),
            verify: matches.get_flag("verify"),
            json: matches.get_flag("json"),
            parallel: matches.get_flag("parallel"),
            separator: matches.get_one::<String>("separator").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
        }
    }

    /// Runner configuration: file values first, then command-line overrides
    ///
    /// # Errors
    /// Fails if the config file cannot be loaded or the result is invalid.
    pub fn runner_config(&self) -> anyhow::Result<RunnerConfig> {
        let mut config = match &self.config {
            Some(path) => RunnerConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RunnerConfig::default(),
        };
        if let Some(separator) = &self.separator {
            config = config.with_separator(separator.clone());
        }
        if self.parallel {
            config = config.with_parallel(true);
        }
        config.validate()?;
        Ok(config)
    }
}

/// How a successful invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything ran (and matched, when verifying)
    Success,
    /// At least one example diverged from its documented output
    Mismatch,
}

impl Outcome {
    /// Process exit status
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Mismatch => 1,
        }
    }

    /// Process exit code
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Exit status for a failed invocation: 2 for an unknown example, else 1
#[must_use]
pub fn error_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CatalogError>() {
        Some(e) if e.is_not_found() => 2,
        _ => 1,
    }
}

/// Install the stderr log subscriber
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

/// Run against `registry`, writing results to `out`
///
/// # Errors
/// - [`CatalogError::NotFound`] for an unknown `NAME`
/// - [`CatalogError::ExampleFailed`] if an example fails
/// - configuration or output errors
pub fn execute(
    options: &Options,
    registry: &Registry,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let config = options.runner_config()?;
    let runner = Runner::new(registry).with_config(config);

    if options.list {
        list(registry, out)?;
        return Ok(Outcome::Success);
    }

    let results = match &options.name {
        Some(name) => vec![runner.run(name)?],
        None => runner.collect_all().into_iter().collect::<Result<Vec<_>, _>>()?,
    };

    if options.verify {
        return verify(&runner, results, out);
    }

    print_results(&runner, &results, options.json, out)?;
    Ok(Outcome::Success)
}

/// Run against the built-in catalog, writing to stdout
///
/// # Errors
/// Same as [`execute`].
pub fn run(options: &Options) -> anyhow::Result<Outcome> {
    let registry = patterns_catalog::builtin_registry()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(options, &registry, &mut out)
}

fn list(registry: &Registry, out: &mut dyn Write) -> anyhow::Result<()> {
    for name in registry.list_names() {
        match find(name) {
            Some(info) => writeln!(out, "{name:<10} {} - {}", info.title, info.summary)?,
            None => writeln!(out, "{name}")?,
        }
    }
    Ok(())
}

fn print_results(
    runner: &Runner<'_>,
    results: &[ExecutionResult],
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, results)?;
        writeln!(out)?;
    } else {
        for result in results {
            writeln!(out, "{}", runner.render(result))?;
        }
    }
    Ok(())
}

fn verify(
    runner: &Runner<'_>,
    results: Vec<ExecutionResult>,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let total = results.len();
    let mut matched = 0;
    for result in results {
        let name = result.example_name.clone();
        let Some(expected) = expected_lines(&name) else {
            writeln!(out, "MISMATCH {name} (no documented output)")?;
            continue;
        };
        match runner.check(result, expected).first_mismatch {
            None => {
                matched += 1;
                writeln!(out, "ok       {name}")?;
            }
            Some(line) => writeln!(out, "MISMATCH {name} (line {line})")?,
        }
    }
    writeln!(out, "{matched}/{total} examples match")?;

    Ok(if matched == total {
        Outcome::Success
    } else {
        Outcome::Mismatch
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use patterns_catalog::builtin_registry;
    use patterns_test_utils::{failing_example, registry_of};
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Options {
        let matches = build_cli()
            .try_get_matches_from(std::iter::once("pattern-demo").chain(args.iter().copied()))
            .unwrap();
        Options::from_matches(&matches)
    }

    fn capture(options: &Options, registry: &Registry) -> (anyhow::Result<Outcome>, String) {
        let mut out = Vec::new();
        let outcome = execute(options, registry, &mut out);
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_defaults() {
        assert_eq!(parse(&[]), Options::default());
    }

    #[test]
    fn parse_name_and_flags() {
        let options = parse(&["observer", "--separator", ",", "--parallel"]);
        assert_eq!(options.name.as_deref(), Some("observer"));
        assert_eq!(options.separator.as_deref(), Some(","));
        assert!(options.parallel);
    }

    #[test]
    fn list_conflicts_with_name() {
        let result = build_cli().try_get_matches_from(["pattern-demo", "--list", "state"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_single() {
        let registry = builtin_registry().unwrap();
        let (outcome, text) = capture(&parse(&["observer"]), &registry);
        assert_eq!(outcome.unwrap(), Outcome::Success);
        assert_eq!(text, "observer: Click me | Press me\n");
    }

    #[test]
    fn run_all_prints_one_line_per_example() {
        let registry = builtin_registry().unwrap();
        let (outcome, text) = capture(&parse(&[]), &registry);
        assert_eq!(outcome.unwrap(), Outcome::Success);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "singleton: True");
        assert_eq!(lines[3], "strategy: 20 | 11");
    }

    #[test]
    fn custom_separator() {
        let registry = builtin_registry().unwrap();
        let (_, text) = capture(&parse(&["factory", "--separator", " / "]), &registry);
        assert_eq!(text, "factory: Woof! / Meow!\n");
    }

    #[test]
    fn json_output() {
        let registry = builtin_registry().unwrap();
        let (_, text) = capture(&parse(&["singleton", "--json"]), &registry);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["example_name"], "singleton");
        assert_eq!(value[0]["lines"][0], "True");
    }

    #[test]
    fn unknown_name_exits_two() {
        let registry = builtin_registry().unwrap();
        let (outcome, text) = capture(&parse(&["nonexistent"]), &registry);
        let err = outcome.unwrap_err();
        assert!(err.downcast_ref::<CatalogError>().unwrap().is_not_found());
        assert_eq!(error_code(&err), 2);
        assert!(text.is_empty());
    }

    #[test]
    fn verify_builtin_catalog() {
        let registry = builtin_registry().unwrap();
        let (outcome, text) = capture(&parse(&["--verify"]), &registry);
        assert_eq!(outcome.unwrap(), Outcome::Success);
        assert!(text.ends_with("10/10 examples match\n"));
    }

    #[test]
    fn verify_detects_mismatch() {
        let registry = registry_of(&[("singleton", &["False"]), ("extra", &["x"])]);
        let (outcome, text) = capture(&parse(&["--verify"]), &registry);
        assert_eq!(outcome.unwrap(), Outcome::Mismatch);
        assert_eq!(
            text,
            "MISMATCH singleton (line 0)\nMISMATCH extra (no documented output)\n0/2 examples match\n"
        );
    }

    /// Answers "True" only when produced off the calling thread
    fn pool_only() -> Result<patterns_core::Lines, patterns_core::ExampleFailure> {
        let on_pool = std::thread::current().name().is_none();
        Ok(patterns_core::lines([if on_pool { "True" } else { "False" }]))
    }

    fn pool_only_registry() -> Registry {
        let mut registry = Registry::new();
        registry.register("singleton", pool_only).unwrap();
        registry
    }

    #[test]
    fn verify_honors_parallel_flag() {
        let registry = pool_only_registry();

        let (outcome, text) = capture(&parse(&["--verify", "--parallel"]), &registry);
        assert_eq!(outcome.unwrap(), Outcome::Success);
        assert_eq!(text, "ok       singleton\n1/1 examples match\n");

        let (outcome, text) = capture(&parse(&["--verify"]), &registry);
        assert_eq!(outcome.unwrap(), Outcome::Mismatch);
        assert_eq!(text, "MISMATCH singleton (line 0)\n0/1 examples match\n");
    }

    #[test]
    fn verify_honors_parallel_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runner.toml");
        std::fs::write(&path, "parallel = true\n").unwrap();

        let registry = pool_only_registry();
        let options = parse(&["--verify", "--config", path.to_str().unwrap()]);
        let (outcome, text) = capture(&options, &registry);
        assert_eq!(outcome.unwrap(), Outcome::Success);
        assert!(text.ends_with("1/1 examples match\n"));
    }

    #[test]
    fn verify_parallel_builtin_catalog() {
        let registry = builtin_registry().unwrap();
        let (outcome, text) = capture(&parse(&["--verify", "--parallel"]), &registry);
        assert_eq!(outcome.unwrap(), Outcome::Success);
        assert_eq!(text.lines().next(), Some("ok       singleton"));
        assert!(text.ends_with("10/10 examples match\n"));
    }

    #[test]
    fn verify_unknown_name_exits_two() {
        let registry = builtin_registry().unwrap();
        let (outcome, text) = capture(&parse(&["nonexistent", "--verify"]), &registry);
        assert_eq!(error_code(&outcome.unwrap_err()), 2);
        assert!(text.is_empty());
    }

    #[test]
    fn second_tracing_install_is_reported() {
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }

    #[test]
    fn example_failure_propagates() {
        let mut registry = Registry::new();
        registry.register("broken", failing_example("not wired")).unwrap();
        let (outcome, _) = capture(&parse(&[]), &registry);
        let err = outcome.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::ExampleFailed { .. })
        ));
        assert_eq!(error_code(&err), 1);
    }

    #[test]
    fn list_shows_titles() {
        let registry = builtin_registry().unwrap();
        let (_, text) = capture(&parse(&["--list"]), &registry);
        assert_eq!(text.lines().count(), 10);
        assert!(text.starts_with("singleton  Singleton - "));
    }

    #[test]
    fn config_file_then_flag_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runner.toml");
        std::fs::write(&path, "separator = \" ; \"\nparallel = true\n").unwrap();
        let path_arg = path.to_str().unwrap();

        let from_file = parse(&["--config", path_arg]).runner_config().unwrap();
        assert_eq!(from_file.separator, " ; ");
        assert!(from_file.parallel);

        let overridden = parse(&["--config", path_arg, "--separator", "+"])
            .runner_config()
            .unwrap();
        assert_eq!(overridden.separator, "+");
    }

    #[test]
    fn empty_separator_rejected() {
        let options = parse(&["--separator", ""]);
        assert!(options.runner_config().is_err());
    }
}
