//! Default values for configuration options.

use crate::network::IpVersion;

/// Loopback and link-local addresses are hidden by default.
pub const INCLUDE_LOOPBACK_AND_LINK_LOCAL: bool = false;

/// CIDR suffixes are stripped by default.
pub const KEEP_CIDR_SUFFIX: bool = false;

/// Grouped output is the default.
pub const ONE_PER_LINE: bool = false;

/// Both families are listed by default.
pub const IP_VERSION: IpVersion = IpVersion::Both;
