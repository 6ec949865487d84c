//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// iplist: List active IP addresses
///
/// Lists IPv4 and IPv6 addresses grouped by interface. Loopback and
/// link-local addresses are hidden unless --all is given.
#[derive(Debug, Parser)]
#[command(name = "iplist")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Include loopback and link-local addresses
    #[arg(short = 'A', long)]
    pub all: bool,

    /// Keep the CIDR suffix (e.g. /24) on each address
    #[arg(short = 'c', long)]
    pub cidr: bool,

    /// Print one address per line without grouping
    #[arg(short = '1', long = "one-per-line")]
    pub one_per_line: bool,

    /// IP version(s) to list
    #[arg(long, value_enum)]
    pub family: Option<IpVersionArg>,

    /// Regex pattern for interfaces to include (can be specified multiple times)
    #[arg(long = "include-iface", value_name = "PATTERN")]
    pub include_interfaces: Vec<String>,

    /// Regex pattern for interfaces to exclude (can be specified multiple times)
    #[arg(long = "exclude-iface", value_name = "PATTERN")]
    pub exclude_interfaces: Vec<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

/// IP version argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IpVersionArg {
    /// List IPv4 addresses only
    #[value(name = "ipv4")]
    V4,
    /// List IPv6 addresses only
    #[value(name = "ipv6")]
    V6,
    /// List both IPv4 and IPv6 addresses
    #[value(name = "both")]
    Both,
}

impl From<IpVersionArg> for crate::network::IpVersion {
    fn from(arg: IpVersionArg) -> Self {
        match arg {
            IpVersionArg::V4 => Self::V4,
            IpVersionArg::V6 => Self::V6,
            IpVersionArg::Both => Self::Both,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown or malformed arguments, and for
    /// `--help` / `--version` (which the caller prints and treats as success).
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Same as [`Cli::try_parse_args`].
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
