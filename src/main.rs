//! iplist: Interface Address Lister
//!
//! Entry point for the iplist application.

use iplist::config::{Cli, ValidatedConfig};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, handle_cli_error, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    // Argument errors stop here, before any query is issued.
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return handle_cli_error(&e),
    };

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::FAILURE;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    match run::execute(config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::FAILURE
        }
    }
}
