//! Network layer for querying and representing interface addresses.
//!
//! This module provides types and traits for:
//! - Representing address records ([`AddressRecord`], [`Scope`], [`AddressFamily`])
//! - IP version selection ([`IpVersion`])
//! - Parsing iproute2 output ([`parse`])
//! - Querying addresses ([`NetworkQuery`])
//! - Filtering records ([`filter`])
//! - Platform-specific implementations ([`platform`])

mod address;
pub mod filter;
pub mod parse;
pub mod platform;
mod query;

#[cfg(test)]
mod filter_tests;

pub use address::{
    AddressFamily, AddressRecord, IpVersion, LOOPBACK_INTERFACE, Scope, strip_cidr,
};
pub use parse::{ParseSkip, RecordResult};
pub use query::{NetworkQuery, QueryError, QueryScope};
