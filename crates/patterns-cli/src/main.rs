//! `pattern-demo` binary entry point

use patterns_cli::{build_cli, error_code, init_tracing, run, Options};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("warning: logging disabled: {err}");
    }

    let matches = build_cli().get_matches();
    let options = Options::from_matches(&matches);

    match run(&options) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            tracing::debug!("Invocation failed: {:?}", err);
            eprintln!("error: {err:#}");
            ExitCode::from(error_code(&err))
        }
    }
}
