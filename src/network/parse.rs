//! Parsing of iproute2 one-line address output.
//!
//! Each line of `ip -o addr show` describes one address, e.g.
//!
//! ```text
//! 2: eth0    inet 198.51.100.10/24 brd 198.51.100.255 scope global eth0\       valid_lft forever preferred_lft forever
//! 2: eth0    inet6 fe80::1/64 scope link \       valid_lft forever preferred_lft forever
//! ```
//!
//! Parsing is best-effort: a line that does not fit the layout yields a
//! [`ParseSkip`] rather than an error for the whole query.

use std::net::IpAddr;

use thiserror::Error;

use super::{AddressFamily, AddressRecord, Scope};

/// Why a single line could not be turned into an [`AddressRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSkip {
    /// The line has no content.
    #[error("blank line")]
    Blank,

    /// A required field is absent.
    #[error("missing {field} in '{line}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
        /// The offending line.
        line: String,
    },

    /// The family keyword does not match the queried family.
    #[error("expected family '{expected}', found '{found}'")]
    FamilyMismatch {
        /// Keyword for the queried family.
        expected: &'static str,
        /// Keyword found on the line.
        found: String,
    },

    /// The address token is not a valid IP address of the queried family.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    /// The CIDR suffix is not a valid prefix length for the family.
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),
}

/// Outcome of parsing one record from the query source.
pub type RecordResult = Result<AddressRecord, ParseSkip>;

/// Parses one line of `ip -o -4|-6 addr show` output.
///
/// # Errors
///
/// Returns [`ParseSkip`] when the line does not describe an address of `family`.
pub fn parse_line(line: &str, family: AddressFamily) -> RecordResult {
    let mut tokens = line.split_whitespace();

    // Leading "<index>:" column.
    if tokens.next().is_none() {
        return Err(ParseSkip::Blank);
    }

    let interface = tokens
        .next()
        .map(|name| name.trim_end_matches(':'))
        .filter(|name| !name.is_empty())
        .ok_or_else(|| missing("interface", line))?;

    let keyword = tokens.next().ok_or_else(|| missing("family", line))?;
    if keyword != family.keyword() {
        return Err(ParseSkip::FamilyMismatch {
            expected: family.keyword(),
            found: keyword.to_string(),
        });
    }

    let cidr = tokens.next().ok_or_else(|| missing("address", line))?;
    let (address, prefix_length) = parse_cidr(cidr, family)?;

    // Point-to-point lines carry "peer <addr>/<len>" before the scope.
    let scope = tokens
        .skip_while(|token| *token != "scope")
        .nth(1)
        .map(Scope::from_tag)
        .ok_or_else(|| missing("scope", line))?;

    Ok(AddressRecord::new(interface, address, prefix_length, scope))
}

/// Parses every non-empty line of a query's output.
pub fn parse_output(output: &str, family: AddressFamily) -> Vec<RecordResult> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line, family))
        .collect()
}

fn parse_cidr(token: &str, family: AddressFamily) -> Result<(IpAddr, Option<u8>), ParseSkip> {
    let (addr_str, prefix_str) = match token.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (token, None),
    };

    let address = addr_str
        .parse::<IpAddr>()
        .ok()
        .filter(|addr| AddressFamily::of(addr) == family)
        .ok_or_else(|| ParseSkip::InvalidAddress(addr_str.to_string()))?;

    let prefix_length = prefix_str
        .map(|prefix| {
            prefix
                .parse::<u8>()
                .ok()
                .filter(|len| *len <= family.max_prefix())
                .ok_or_else(|| ParseSkip::InvalidPrefix(prefix.to_string()))
        })
        .transpose()?;

    Ok((address, prefix_length))
}

fn missing(field: &'static str, line: &str) -> ParseSkip {
    ParseSkip::MissingField {
        field,
        line: line.to_string(),
    }
}
