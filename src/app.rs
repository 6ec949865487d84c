//! Application startup and utilities.
//!
//! This module contains exit codes, argument error handling, and tracing
//! setup that support the main entry point.

use clap::error::ErrorKind;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0), including `--help` and `--version`.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Failure (exit code 1) - bad arguments, invalid config, missing `ip`, query or output failure.
    pub const FAILURE: ExitCode = ExitCode::FAILURE;
}

/// Reports a CLI parse failure and returns the exit code for it.
///
/// Help and version requests print to stdout and succeed; every other
/// error prints clap's message with usage to stderr and fails with 1.
pub fn handle_cli_error(error: &clap::Error) -> std::process::ExitCode {
    error.print().ok();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_code::SUCCESS,
        _ => exit_code::FAILURE,
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the address listing.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use iplist::config::Cli;

    fn parse_err(args: &[&str]) -> clap::Error {
        Cli::try_parse_from_iter(std::iter::once("iplist").chain(args.iter().copied()))
            .unwrap_err()
    }

    #[test]
    fn unknown_flag_fails() {
        assert_eq!(handle_cli_error(&parse_err(&["--bogus"])), exit_code::FAILURE);
    }

    #[test]
    fn stray_positional_fails() {
        assert_eq!(handle_cli_error(&parse_err(&["eth0"])), exit_code::FAILURE);
    }

    #[test]
    fn help_succeeds() {
        assert_eq!(handle_cli_error(&parse_err(&["-h"])), exit_code::SUCCESS);
        assert_eq!(handle_cli_error(&parse_err(&["--help"])), exit_code::SUCCESS);
    }

    #[test]
    fn version_succeeds() {
        assert_eq!(handle_cli_error(&parse_err(&["-V"])), exit_code::SUCCESS);
    }
}
