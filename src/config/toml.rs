//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Output configuration section
    #[serde(default)]
    pub display: DisplaySection,

    /// Interface filter configuration
    #[serde(default)]
    pub filter: FilterSection,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplaySection {
    /// Include loopback and link-local addresses
    pub all: Option<bool>,

    /// Keep CIDR suffixes
    pub cidr: Option<bool>,

    /// Flat output, one address per line
    pub one_per_line: Option<bool>,

    /// IP version(s) to list: "ipv4", "ipv6", or "both"
    pub family: Option<String>,
}

/// Interface filter configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Regex patterns for interfaces to include
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns for interfaces to exclude
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}
