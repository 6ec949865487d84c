//! Application execution logic.
//!
//! Queries the host's addresses once and writes the report to stdout.

use std::io::{self, Write};

use thiserror::Error;

use iplist::config::ValidatedConfig;
use iplist::lister::AddressLister;
use iplist::network::platform::PlatformQuery;
use iplist::network::{NetworkQuery, QueryError};
use iplist::report::write_report;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to query interface addresses.
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Failed to write the report.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Lists addresses using the platform query and prints them to stdout.
///
/// # Errors
///
/// Returns an error if:
/// - The `ip` tool is missing or fails
/// - Writing to stdout fails
///
/// # Coverage Note
///
/// Excluded from coverage because it requires the host's iproute2 tool.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let stdout = io::stdout();
    execute_with(PlatformQuery::default(), config, &mut stdout.lock())
}

/// Lists addresses from `query` and writes the report to `out`.
///
/// Nothing is written unless every family query succeeded.
///
/// # Errors
///
/// Returns [`RunError::Query`] if a query fails and [`RunError::Output`]
/// if writing to `out` fails.
pub fn execute_with<Q: NetworkQuery, W: Write>(
    query: Q,
    config: ValidatedConfig,
    out: &mut W,
) -> Result<(), RunError> {
    let lister = AddressLister::new(query, config.display)
        .with_version(config.ip_version)
        .with_filter(config.filter);

    let report = lister.collect()?;
    tracing::debug!("Listing {} address(es)", report.flat_addresses().count());

    write_report(&report, lister.options().one_per_line, out).map_err(RunError::Output)?;
    out.flush().map_err(RunError::Output)
}
