//! Address query trait and error types.

use std::io;

use thiserror::Error;

use super::AddressFamily;
use super::parse::RecordResult;

/// Error type for address query operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The tool backing the query is not installed.
    #[error("Missing dependency: '{command}' not found on PATH")]
    MissingDependency {
        /// Name of the missing command.
        command: String,
    },

    /// The query tool could not be started for a reason other than absence.
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        /// Name of the command.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The query tool ran but reported failure.
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        /// Name of the command.
        command: String,
        /// Exit status as displayed by the OS.
        status: String,
        /// Trimmed standard error output.
        stderr: String,
    },
}

impl QueryError {
    /// Maps a spawn failure to [`QueryError::MissingDependency`] when the
    /// binary does not exist, otherwise to [`QueryError::Spawn`].
    #[must_use]
    pub fn from_spawn(command: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::MissingDependency {
                command: command.to_string(),
            }
        } else {
            Self::Spawn {
                command: command.to_string(),
                source,
            }
        }
    }
}

/// Which addresses a query asks the system for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryScope {
    /// Only global-scope addresses on administratively-up interfaces.
    GlobalUp,
    /// Every address regardless of scope or interface state.
    All,
}

impl QueryScope {
    /// Selects the query scope for the given visibility setting.
    #[must_use]
    pub const fn for_visibility(include_loopback_and_link_local: bool) -> Self {
        if include_loopback_and_link_local {
            Self::All
        } else {
            Self::GlobalUp
        }
    }
}

/// Trait for querying the host's interface addresses.
///
/// # Implementation Notes
///
/// - One call covers one address family
/// - Records are returned in the order the system reports them
/// - Unparseable records are returned as `Err(ParseSkip)` entries rather than
///   failing the whole query
pub trait NetworkQuery {
    /// Lists addresses of `family` restricted by `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the query facility is unavailable or fails.
    fn addresses(
        &self,
        family: AddressFamily,
        scope: QueryScope,
    ) -> Result<Vec<RecordResult>, QueryError>;
}

impl<T: NetworkQuery + ?Sized> NetworkQuery for &T {
    fn addresses(
        &self,
        family: AddressFamily,
        scope: QueryScope,
    ) -> Result<Vec<RecordResult>, QueryError> {
        (*self).addresses(family, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_missing_dependency() {
        let error = QueryError::from_spawn("ip", io::Error::from(io::ErrorKind::NotFound));

        assert!(matches!(error, QueryError::MissingDependency { ref command } if command == "ip"));
        assert!(error.to_string().contains("'ip' not found"));
    }

    #[test]
    fn other_spawn_errors_are_preserved() {
        let error = QueryError::from_spawn("ip", io::Error::from(io::ErrorKind::PermissionDenied));

        assert!(matches!(error, QueryError::Spawn { .. }));
    }

    #[test]
    fn command_failed_displays_stderr() {
        let error = QueryError::CommandFailed {
            command: "ip".to_string(),
            status: "exit status: 255".to_string(),
            stderr: "Object \"addr\" is unknown".to_string(),
        };

        assert!(error.to_string().contains("exit status: 255"));
        assert!(error.to_string().contains("unknown"));
    }

    #[test]
    fn scope_follows_visibility() {
        assert_eq!(QueryScope::for_visibility(false), QueryScope::GlobalUp);
        assert_eq!(QueryScope::for_visibility(true), QueryScope::All);
    }
}
