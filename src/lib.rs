//! iplist: Interface Address Lister
//!
//! A library for listing a host's IPv4/IPv6 addresses grouped by
//! interface, with loopback/link-local visibility and CIDR controls.

pub mod config;
pub mod lister;
pub mod network;
pub mod report;
