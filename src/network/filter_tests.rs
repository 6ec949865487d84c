//! Tests for the address filtering module.

use super::filter::*;
use super::{AddressRecord, Scope};

// ============================================================================
// Test Fixtures
// ============================================================================

fn eth0_v4() -> AddressRecord {
    AddressRecord::new("eth0", "198.51.100.10".parse().unwrap(), Some(24), Scope::Global)
}

fn eth0_v6_global() -> AddressRecord {
    AddressRecord::new("eth0", "2001:db8::10".parse().unwrap(), Some(64), Scope::Global)
}

fn eth0_v6_link() -> AddressRecord {
    AddressRecord::new("eth0", "fe80::1".parse().unwrap(), Some(64), Scope::Link)
}

fn eth0_v4_link() -> AddressRecord {
    AddressRecord::new("eth0", "169.254.7.7".parse().unwrap(), Some(16), Scope::Link)
}

fn lo_v4() -> AddressRecord {
    AddressRecord::new("lo", "127.0.0.1".parse().unwrap(), Some(8), Scope::Host)
}

fn lo_v6() -> AddressRecord {
    AddressRecord::new("lo", "::1".parse().unwrap(), Some(128), Scope::Host)
}

fn docker0_v4() -> AddressRecord {
    AddressRecord::new("docker0", "172.17.0.1".parse().unwrap(), Some(16), Scope::Global)
}

fn wlan0_v4() -> AddressRecord {
    AddressRecord::new("wlan0", "192.168.1.20".parse().unwrap(), Some(24), Scope::Global)
}

// ============================================================================
// LoopbackLinkLocalFilter Tests
// ============================================================================

mod loopback_link_local_filter {
    use super::*;

    #[test]
    fn matches_any_record_on_lo() {
        assert!(LoopbackLinkLocalFilter.matches(&lo_v4()));
        assert!(LoopbackLinkLocalFilter.matches(&lo_v6()));
    }

    #[test]
    fn matches_ipv6_link_scope() {
        assert!(LoopbackLinkLocalFilter.matches(&eth0_v6_link()));
    }

    #[test]
    fn ignores_ipv4_link_scope() {
        assert!(!LoopbackLinkLocalFilter.matches(&eth0_v4_link()));
    }

    #[test]
    fn ignores_global_records() {
        assert!(!LoopbackLinkLocalFilter.matches(&eth0_v4()));
        assert!(!LoopbackLinkLocalFilter.matches(&eth0_v6_global()));
    }
}

// ============================================================================
// NameRegexFilter Tests
// ============================================================================

mod name_regex_filter {
    use super::*;

    #[test]
    fn matches_prefix_pattern() {
        let filter = NameRegexFilter::new("^eth").unwrap();
        assert!(filter.matches(&eth0_v4()));
        assert!(!filter.matches(&wlan0_v4()));
    }

    #[test]
    fn matches_alternation() {
        let filter = NameRegexFilter::new("^(eth|wlan)").unwrap();
        assert!(filter.matches(&eth0_v4()));
        assert!(filter.matches(&wlan0_v4()));
        assert!(!filter.matches(&docker0_v4()));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(NameRegexFilter::new("[unclosed").is_err());
    }

    #[test]
    fn pattern_accessor_returns_source() {
        let filter = NameRegexFilter::new("^eth").unwrap();
        assert_eq!(filter.pattern().as_str(), "^eth");
    }
}

// ============================================================================
// FilterChain Tests
// ============================================================================

mod filter_chain {
    use super::*;

    #[test]
    fn empty_chain_matches_everything() {
        let chain = FilterChain::new();

        assert!(chain.is_empty());
        assert!(chain.matches(&eth0_v4()));
        assert!(chain.matches(&lo_v4()));
    }

    #[test]
    fn exclude_rejects_matching_records() {
        let chain = FilterChain::new().exclude(LoopbackLinkLocalFilter);

        assert!(chain.matches(&eth0_v4()));
        assert!(!chain.matches(&lo_v4()));
        assert!(!chain.matches(&eth0_v6_link()));
    }

    #[test]
    fn includes_use_or_semantics() {
        let chain = FilterChain::new()
            .include(NameRegexFilter::new("^eth").unwrap())
            .include(NameRegexFilter::new("^wlan").unwrap());

        assert!(chain.matches(&eth0_v4()));
        assert!(chain.matches(&wlan0_v4()));
        assert!(!chain.matches(&docker0_v4()));
    }

    #[test]
    fn exclude_wins_over_include() {
        let chain = FilterChain::new()
            .exclude(LoopbackLinkLocalFilter)
            .include(NameRegexFilter::new(".*").unwrap());

        assert!(!chain.matches(&lo_v4()));
        assert!(chain.matches(&docker0_v4()));
    }

    #[test]
    fn multiple_excludes_all_apply() {
        let chain = FilterChain::new()
            .exclude(LoopbackLinkLocalFilter)
            .exclude(NameRegexFilter::new("^docker").unwrap());

        assert!(!chain.matches(&lo_v4()));
        assert!(!chain.matches(&docker0_v4()));
        assert!(chain.matches(&wlan0_v4()));
    }

    #[test]
    fn counts_reflect_configuration() {
        let chain = FilterChain::new()
            .exclude(LoopbackLinkLocalFilter)
            .include(NameRegexFilter::new("^eth").unwrap())
            .include(NameRegexFilter::new("^wlan").unwrap());

        assert_eq!(chain.exclude_count(), 1);
        assert_eq!(chain.include_count(), 2);
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
    }

    #[test]
    fn debug_shows_counts_only() {
        let chain = FilterChain::new().exclude(LoopbackLinkLocalFilter);
        let debug = format!("{chain:?}");

        assert!(debug.contains("exclude_count: 1"));
        assert!(debug.contains("include_count: 0"));
    }

    #[test]
    fn reference_and_box_forward_to_inner() {
        let boxed: Box<dyn AddressFilter> = Box::new(LoopbackLinkLocalFilter);
        let by_ref = &LoopbackLinkLocalFilter;

        assert!(boxed.matches(&lo_v4()));
        assert!(by_ref.matches(&lo_v4()));
    }
}
