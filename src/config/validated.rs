//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;

use crate::lister::DisplayOptions;
use crate::network::IpVersion;
use crate::network::filter::{FilterChain, NameRegexFilter};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Output settings
    pub display: DisplayOptions,

    /// IP version(s) to list
    pub ip_version: IpVersion,

    /// Interface name filters
    pub filter: FilterChain,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ {}, family: {}, filters: {} }}",
            self.display,
            self.ip_version,
            self.filter.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML `family` value is not a known IP version
    /// - A regex pattern is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let display = Self::resolve_display(cli, toml);
        let ip_version = Self::resolve_ip_version(cli, toml)?;
        let filter = Self::build_filter(cli, toml)?;

        Ok(Self {
            display,
            ip_version,
            filter,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_display(cli: &Cli, toml: Option<&TomlConfig>) -> DisplayOptions {
        let section = toml.map(|t| &t.display);

        // Flags only enable: set in either source means set.
        DisplayOptions {
            include_loopback_and_link_local: cli.all
                || section
                    .and_then(|s| s.all)
                    .unwrap_or(defaults::INCLUDE_LOOPBACK_AND_LINK_LOCAL),
            keep_cidr_suffix: cli.cidr
                || section
                    .and_then(|s| s.cidr)
                    .unwrap_or(defaults::KEEP_CIDR_SUFFIX),
            one_per_line: cli.one_per_line
                || section
                    .and_then(|s| s.one_per_line)
                    .unwrap_or(defaults::ONE_PER_LINE),
        }
    }

    fn resolve_ip_version(cli: &Cli, toml: Option<&TomlConfig>) -> Result<IpVersion, ConfigError> {
        if let Some(version) = cli.family {
            return Ok(version.into());
        }

        toml.and_then(|t| t.display.family.as_deref())
            .map_or(Ok(defaults::IP_VERSION), parse_ip_version)
    }

    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        // CLI patterns replace TOML patterns, per list.
        let includes = if cli.include_interfaces.is_empty() {
            toml.map_or(&[][..], |t| t.filter.include.as_slice())
        } else {
            cli.include_interfaces.as_slice()
        };
        let excludes = if cli.exclude_interfaces.is_empty() {
            toml.map_or(&[][..], |t| t.filter.exclude.as_slice())
        } else {
            cli.exclude_interfaces.as_slice()
        };

        let mut filter = FilterChain::new();
        for pattern in includes {
            filter = filter.include(compile(pattern)?);
        }
        for pattern in excludes {
            filter = filter.exclude(compile(pattern)?);
        }
        Ok(filter)
    }
}

// Helper functions

fn compile(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
    NameRegexFilter::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn parse_ip_version(s: &str) -> Result<IpVersion, ConfigError> {
    match s.to_lowercase().as_str() {
        "ipv4" | "v4" | "4" => Ok(IpVersion::V4),
        "ipv6" | "v6" | "6" => Ok(IpVersion::V6),
        "both" | "all" | "dual" => Ok(IpVersion::Both),
        _ => Err(ConfigError::InvalidIpVersion {
            value: s.to_string(),
        }),
    }
}
