//! Core network types for address representation.

use std::fmt;
use std::net::IpAddr;

/// Address family of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// IPv4 (`inet`).
    V4,
    /// IPv6 (`inet6`).
    V6,
}

impl AddressFamily {
    /// Both families, in rendering order.
    pub const ALL: [Self; 2] = [Self::V4, Self::V6];

    /// Family keyword used by iproute2 output (`inet` / `inet6`).
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::V4 => "inet",
            Self::V6 => "inet6",
        }
    }

    /// Maximum valid prefix length for this family.
    #[must_use]
    pub const fn max_prefix(self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }

    /// Returns the family of the given address.
    #[must_use]
    pub const fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// IP version(s) to list.
///
/// Defaults to [`IpVersion::Both`], which yields the full two-section report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IpVersion {
    /// List IPv4 addresses only.
    V4,
    /// List IPv6 addresses only.
    V6,
    /// List both IPv4 and IPv6 addresses.
    #[default]
    Both,
}

impl IpVersion {
    /// Returns true if this version includes IPv4.
    #[must_use]
    pub const fn includes_v4(self) -> bool {
        matches!(self, Self::V4 | Self::Both)
    }

    /// Returns true if this version includes IPv6.
    #[must_use]
    pub const fn includes_v6(self) -> bool {
        matches!(self, Self::V6 | Self::Both)
    }

    /// Returns true if this version includes the given family.
    #[must_use]
    pub const fn includes(self, family: AddressFamily) -> bool {
        match family {
            AddressFamily::V4 => self.includes_v4(),
            AddressFamily::V6 => self.includes_v6(),
        }
    }

    /// Families selected by this version, IPv4 first.
    pub fn families(self) -> impl Iterator<Item = AddressFamily> {
        AddressFamily::ALL
            .into_iter()
            .filter(move |family| self.includes(*family))
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
            Self::Both => write!(f, "Both"),
        }
    }
}

/// Visibility class of an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Routable outside the host.
    Global,
    /// Valid only on the local link.
    Link,
    /// Loopback only.
    Host,
    /// Any other scope tag reported by the system (`site`, numeric, ...).
    Other(String),
}

impl Scope {
    /// Maps a scope tag as printed by iproute2 to a [`Scope`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "global" => Self::Global,
            "link" => Self::Link,
            "host" => Self::Host,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns true for link scope.
    #[must_use]
    pub const fn is_link(&self) -> bool {
        matches!(self, Self::Link)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Link => write!(f, "link"),
            Self::Host => write!(f, "host"),
            Self::Other(tag) => write!(f, "{tag}"),
        }
    }
}

/// Name of the loopback interface on Linux.
pub const LOOPBACK_INTERFACE: &str = "lo";

/// One observed address on one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// Interface name (e.g. "eth0").
    pub interface: String,
    /// Address family, always consistent with `address`.
    pub family: AddressFamily,
    /// The address itself.
    pub address: IpAddr,
    /// CIDR prefix length, if the source reported one.
    pub prefix_length: Option<u8>,
    /// Address scope.
    pub scope: Scope,
}

impl AddressRecord {
    /// Creates a new address record. The family is derived from `address`.
    #[must_use]
    pub fn new(
        interface: impl Into<String>,
        address: IpAddr,
        prefix_length: Option<u8>,
        scope: Scope,
    ) -> Self {
        Self {
            interface: interface.into(),
            family: AddressFamily::of(&address),
            address,
            prefix_length,
            scope,
        }
    }

    /// Returns true if the record belongs to the loopback interface.
    #[must_use]
    pub fn is_loopback_interface(&self) -> bool {
        self.interface == LOOPBACK_INTERFACE
    }

    /// Returns true for IPv6 link-local scope records.
    #[must_use]
    pub const fn is_ipv6_link_local(&self) -> bool {
        matches!(self.family, AddressFamily::V6) && self.scope.is_link()
    }

    /// Textual address with the CIDR suffix, as reported by the source.
    #[must_use]
    pub fn cidr(&self) -> String {
        self.prefix_length.map_or_else(
            || self.address.to_string(),
            |prefix| format!("{}/{prefix}", self.address),
        )
    }

    /// Textual address for output, with or without the CIDR suffix.
    #[must_use]
    pub fn display_address(&self, keep_cidr: bool) -> String {
        strip_cidr(&self.cidr(), keep_cidr).to_string()
    }
}

/// Truncates `address` at the first `/` unless `keep_cidr` is set.
#[must_use]
pub fn strip_cidr(address: &str, keep_cidr: bool) -> &str {
    if keep_cidr {
        return address;
    }
    address.split_once('/').map_or(address, |(addr, _)| addr)
}
