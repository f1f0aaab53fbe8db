use std::process::ExitCode;

use stash_cli::{RunConfig, USAGE};

fn main() -> ExitCode {
    stash_observability::init();

    let result = RunConfig::from_args(std::env::args().skip(1))
        .and_then(|config| stash_cli::run(&config, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            if err.is_usage() {
                eprintln!("{USAGE}");
            }
            tracing::debug!(error = ?err, "run failed");
            ExitCode::from(err.exit_code())
        }
    }
}
