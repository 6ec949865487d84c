//! Address listing: query, filter, and group.

use std::fmt;

use crate::network::filter::{AddressFilter, FilterChain, LoopbackLinkLocalFilter};
use crate::network::{AddressFamily, IpVersion, NetworkQuery, QueryError, QueryScope};
use crate::report::{AddressReport, InterfaceAddressGroup};

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;

/// Output settings resolved once per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Show loopback (`lo`) and IPv6 link-local addresses.
    pub include_loopback_and_link_local: bool,
    /// Keep the `/<prefix>` suffix on each address.
    pub keep_cidr_suffix: bool,
    /// Flat output, one address per line.
    pub one_per_line: bool,
}

impl fmt::Display for DisplayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "all: {}, cidr: {}, one_per_line: {}",
            self.include_loopback_and_link_local, self.keep_cidr_suffix, self.one_per_line
        )
    }
}

/// Lists interface addresses from a [`NetworkQuery`].
///
/// The visibility rule from [`DisplayOptions`] is always applied on top of
/// any user filters, so user include patterns cannot reveal hidden records.
#[derive(Debug)]
pub struct AddressLister<Q> {
    query: Q,
    options: DisplayOptions,
    version: IpVersion,
    filter: FilterChain,
}

impl<Q: NetworkQuery> AddressLister<Q> {
    /// Creates a lister for both families with no interface filters.
    #[must_use]
    pub fn new(query: Q, options: DisplayOptions) -> Self {
        Self {
            query,
            options,
            version: IpVersion::Both,
            filter: FilterChain::new(),
        }
    }

    /// Restricts the listing to the given IP version(s).
    #[must_use]
    pub fn with_version(mut self, version: IpVersion) -> Self {
        self.version = version;
        self
    }

    /// Applies an interface filter chain in addition to the visibility rule.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterChain) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the display options.
    #[must_use]
    pub const fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Queries every requested family and groups surviving addresses.
    ///
    /// All queries complete before the report is returned, so a failure
    /// never yields partial output.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if any family query fails.
    pub fn collect(&self) -> Result<AddressReport, QueryError> {
        let mut report = AddressReport::default();
        for family in self.version.families() {
            report.set(family, self.collect_family(family)?);
        }
        Ok(report)
    }

    fn collect_family(&self, family: AddressFamily) -> Result<InterfaceAddressGroup, QueryError> {
        let scope = QueryScope::for_visibility(self.options.include_loopback_and_link_local);
        let results = self.query.addresses(family, scope)?;
        tracing::debug!("{family} query returned {} record(s)", results.len());

        let mut group = InterfaceAddressGroup::new();
        for result in results {
            let record = match result {
                Ok(record) => record,
                Err(skip) => {
                    tracing::debug!("Skipping {family} record: {skip}");
                    continue;
                }
            };

            if record.family != family {
                tracing::debug!("Skipping {} on {}: wrong family", record.address, record.interface);
                continue;
            }
            if !self.options.include_loopback_and_link_local
                && LoopbackLinkLocalFilter.matches(&record)
            {
                continue;
            }
            if !self.filter.matches(&record) {
                tracing::debug!("Filtered out {} on {}", record.address, record.interface);
                continue;
            }

            group.push(
                &record.interface,
                record.display_address(self.options.keep_cidr_suffix),
            );
        }
        Ok(group)
    }
}
