//! Address record filtering.
//!
//! # Design
//!
//! - **Pure Matchers**: [`LoopbackLinkLocalFilter`] and [`NameRegexFilter`]
//!   only answer "does this record match?" without include/exclude semantics.
//! - **Filter Chain**: [`FilterChain`] combines matchers with include/exclude semantics:
//!   - Exclude filters: AND logic (must pass ALL excludes)
//!   - Include filters: OR logic (pass ANY include, empty = match all)

use regex::Regex;

use super::AddressRecord;

/// Trait for filtering address records.
pub trait AddressFilter {
    /// Returns `true` if the record matches this filter.
    fn matches(&self, record: &AddressRecord) -> bool;
}

// ============================================================================
// LoopbackLinkLocalFilter - records hidden unless --all is given
// ============================================================================

/// Matches records on the loopback interface and IPv6 link-local records.
///
/// Used as an exclude filter when loopback and link-local addresses are not
/// requested.
///
/// # Examples
///
/// ```
/// use iplist::network::filter::{AddressFilter, LoopbackLinkLocalFilter};
/// use iplist::network::{AddressRecord, Scope};
///
/// let filter = LoopbackLinkLocalFilter;
///
/// let lo = AddressRecord::new("lo", "127.0.0.1".parse().unwrap(), Some(8), Scope::Host);
/// let link = AddressRecord::new("eth0", "fe80::1".parse().unwrap(), Some(64), Scope::Link);
/// let eth = AddressRecord::new("eth0", "192.0.2.7".parse().unwrap(), Some(24), Scope::Global);
///
/// assert!(filter.matches(&lo));
/// assert!(filter.matches(&link));
/// assert!(!filter.matches(&eth));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopbackLinkLocalFilter;

impl AddressFilter for LoopbackLinkLocalFilter {
    fn matches(&self, record: &AddressRecord) -> bool {
        record.is_loopback_interface() || record.is_ipv6_link_local()
    }
}

// ============================================================================
// NameRegexFilter - Pure matcher by interface name pattern
// ============================================================================

/// Matches records whose interface name matches a regex pattern.
///
/// # Examples
///
/// ```
/// use iplist::network::filter::{AddressFilter, NameRegexFilter};
/// use iplist::network::{AddressRecord, Scope};
///
/// let filter = NameRegexFilter::new(r"^eth").unwrap();
///
/// let eth0 = AddressRecord::new("eth0", "192.0.2.1".parse().unwrap(), None, Scope::Global);
/// let wlan0 = AddressRecord::new("wlan0", "192.0.2.2".parse().unwrap(), None, Scope::Global);
///
/// assert!(filter.matches(&eth0));
/// assert!(!filter.matches(&wlan0));
/// ```
#[derive(Debug)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns a reference to the regex pattern.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Regex is not a const type
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl AddressFilter for NameRegexFilter {
    fn matches(&self, record: &AddressRecord) -> bool {
        self.pattern.is_match(&record.interface)
    }
}

// ============================================================================
// FilterChain - Include OR / Exclude AND semantics
// ============================================================================

/// Filter chain with include/exclude semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: Any match → reject.
/// 2. **Include filters (OR)**: Any match → accept. Empty includes = match all.
///
/// # Examples
///
/// ```
/// use iplist::network::filter::{AddressFilter, FilterChain, LoopbackLinkLocalFilter, NameRegexFilter};
/// use iplist::network::{AddressRecord, Scope};
///
/// let chain = FilterChain::new()
///     .exclude(LoopbackLinkLocalFilter)
///     .include(NameRegexFilter::new("^eth").unwrap());
///
/// let eth = AddressRecord::new("eth0", "192.0.2.1".parse().unwrap(), None, Scope::Global);
/// let wlan = AddressRecord::new("wlan0", "192.0.2.2".parse().unwrap(), None, Scope::Global);
/// let lo = AddressRecord::new("lo", "127.0.0.1".parse().unwrap(), None, Scope::Host);
///
/// assert!(chain.matches(&eth));
/// assert!(!chain.matches(&wlan)); // Not in includes
/// assert!(!chain.matches(&lo));   // Excluded
/// ```
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn AddressFilter>>,
    excludes: Vec<Box<dyn AddressFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all records).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    #[must_use]
    pub fn include<F: AddressFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (AND semantics - must not match ANY).
    #[must_use]
    pub fn exclude<F: AddressFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Returns the number of include filters.
    #[must_use]
    pub(crate) fn include_count(&self) -> usize {
        self.includes.len()
    }

    /// Returns the number of exclude filters.
    #[must_use]
    pub(crate) fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Returns the total number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.includes.len() + self.excludes.len()
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }
}

impl AddressFilter for FilterChain {
    fn matches(&self, record: &AddressRecord) -> bool {
        if self.excludes.iter().any(|f| f.matches(record)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(record))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .finish()
    }
}

impl<T: AddressFilter + ?Sized> AddressFilter for &T {
    fn matches(&self, record: &AddressRecord) -> bool {
        (*self).matches(record)
    }
}

impl AddressFilter for Box<dyn AddressFilter> {
    fn matches(&self, record: &AddressRecord) -> bool {
        self.as_ref().matches(record)
    }
}
