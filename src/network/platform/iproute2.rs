//! Address query backed by the iproute2 `ip` tool.

use std::process::Command;

use crate::network::parse::{RecordResult, parse_output};
use crate::network::{AddressFamily, NetworkQuery, QueryError, QueryScope};

/// Default binary name, resolved through `PATH`.
const DEFAULT_PROGRAM: &str = "ip";

/// [`NetworkQuery`] implementation that runs `ip -o -4|-6 addr show`.
///
/// # Example
///
/// ```no_run
/// use iplist::network::{AddressFamily, NetworkQuery, QueryScope, platform::IpRoute2Query};
///
/// let query = IpRoute2Query::new();
/// let records = query
///     .addresses(AddressFamily::V4, QueryScope::GlobalUp)
///     .expect("ip addr show failed");
///
/// for record in records.into_iter().flatten() {
///     println!("{}: {}", record.interface, record.cidr());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IpRoute2Query {
    program: String,
}

impl Default for IpRoute2Query {
    fn default() -> Self {
        Self::new()
    }
}

impl IpRoute2Query {
    /// Creates a query using `ip` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Creates a query using a specific binary.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the binary this query runs.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Builds the argument list for one family/scope query.
#[must_use]
fn command_args(family: AddressFamily, scope: QueryScope) -> Vec<&'static str> {
    let family_flag = match family {
        AddressFamily::V4 => "-4",
        AddressFamily::V6 => "-6",
    };

    let mut args = vec!["-o", family_flag, "addr", "show"];
    if scope == QueryScope::GlobalUp {
        args.extend(["up", "scope", "global"]);
    }
    args
}

impl NetworkQuery for IpRoute2Query {
    fn addresses(
        &self,
        family: AddressFamily,
        scope: QueryScope,
    ) -> Result<Vec<RecordResult>, QueryError> {
        let args = command_args(family, scope);
        tracing::debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| QueryError::from_spawn(&self.program, e))?;

        if !output.status.success() {
            return Err(QueryError::CommandFailed {
                command: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_output(&stdout, family))
    }
}
