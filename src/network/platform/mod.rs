//! Platform-specific address query implementations.
//!
//! # Platform Support
//!
//! - **Linux**: Uses the iproute2 `ip` tool ([`IpRoute2Query`]).
//!   On hosts without it, queries fail with `QueryError::MissingDependency`.

mod iproute2;

pub use iproute2::IpRoute2Query;

// Re-export the platform query as PlatformQuery for convenience
pub use iproute2::IpRoute2Query as PlatformQuery;
