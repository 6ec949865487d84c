//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid regex pattern for interface filtering.
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Invalid IP version value.
    #[error("Invalid IP version '{value}': expected ipv4, ipv6, or both")]
    InvalidIpVersion {
        /// The invalid value provided
        value: String,
    },
}
