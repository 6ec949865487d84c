//! Configuration layer for iplist.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (`--config`)
//! 3. **Built-in defaults**
//!
//! For interface patterns (`include`, `exclude`), CLI patterns **replace**
//! TOML patterns entirely. Include and exclude lists are handled independently.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--all`, `--cidr`, `--one-per-line`) use OR semantics:
//! once set `true` in the config file, the CLI cannot turn them off.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, IpVersionArg};
pub use error::ConfigError;
pub use toml::{DisplaySection, FilterSection, TomlConfig};
pub use validated::ValidatedConfig;
