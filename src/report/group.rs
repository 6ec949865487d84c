//! Per-interface address grouping.

use crate::network::AddressFamily;

/// Ordered mapping from interface name to the addresses seen on it.
///
/// Interfaces iterate in first-seen order; addresses within an interface
/// keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceAddressGroup {
    entries: Vec<(String, Vec<String>)>,
}

impl InterfaceAddressGroup {
    /// Creates an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `address` to the bucket for `interface`, creating it if needed.
    pub fn push(&mut self, interface: &str, address: String) {
        match self.entries.iter().position(|(name, _)| name == interface) {
            Some(index) => self.entries[index].1.push(address),
            None => self.entries.push((interface.to_string(), vec![address])),
        }
    }

    /// Returns true if no interface has any address.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of interfaces in the group.
    #[must_use]
    pub fn interface_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of addresses across all interfaces.
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.entries.iter().map(|(_, addresses)| addresses.len()).sum()
    }

    /// Addresses recorded for `interface`, if any.
    #[must_use]
    pub fn get(&self, interface: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == interface)
            .map(|(_, addresses)| addresses.as_slice())
    }

    /// Iterates `(interface, addresses)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, addresses)| (name.as_str(), addresses.as_slice()))
    }

    /// Iterates every address across all interfaces, in group order.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, addresses)| addresses.iter().map(String::as_str))
    }
}

/// The groups produced by one listing, one per requested family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressReport {
    /// IPv4 group, `None` when IPv4 was not requested.
    pub ipv4: Option<InterfaceAddressGroup>,
    /// IPv6 group, `None` when IPv6 was not requested.
    pub ipv6: Option<InterfaceAddressGroup>,
}

impl AddressReport {
    /// Stores `group` as the section for `family`.
    pub fn set(&mut self, family: AddressFamily, group: InterfaceAddressGroup) {
        match family {
            AddressFamily::V4 => self.ipv4 = Some(group),
            AddressFamily::V6 => self.ipv6 = Some(group),
        }
    }

    /// Requested sections, IPv4 first.
    pub fn sections(&self) -> impl Iterator<Item = (AddressFamily, &InterfaceAddressGroup)> {
        [
            (AddressFamily::V4, self.ipv4.as_ref()),
            (AddressFamily::V6, self.ipv6.as_ref()),
        ]
        .into_iter()
        .filter_map(|(family, group)| group.map(|g| (family, g)))
    }

    /// Lazily iterates every address: all IPv4, then all IPv6.
    pub fn flat_addresses(&self) -> impl Iterator<Item = &str> {
        self.sections().flat_map(|(_, group)| group.addresses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_of(pairs: &[(&str, &str)]) -> InterfaceAddressGroup {
        let mut group = InterfaceAddressGroup::new();
        for (iface, addr) in pairs {
            group.push(iface, (*addr).to_string());
        }
        group
    }

    mod interface_address_group {
        use super::*;

        #[test]
        fn new_group_is_empty() {
            let group = InterfaceAddressGroup::new();

            assert!(group.is_empty());
            assert_eq!(group.interface_count(), 0);
            assert_eq!(group.address_count(), 0);
        }

        #[test]
        fn same_interface_shares_a_bucket() {
            let group = group_of(&[("eth0", "10.0.0.1"), ("eth0", "10.0.0.2")]);

            assert_eq!(group.interface_count(), 1);
            assert_eq!(
                group.get("eth0"),
                Some(&["10.0.0.1".to_string(), "10.0.0.2".to_string()][..])
            );
        }

        #[test]
        fn interfaces_keep_first_seen_order() {
            let group = group_of(&[
                ("wlan0", "192.168.1.2"),
                ("eth0", "10.0.0.1"),
                ("wlan0", "192.168.1.3"),
            ]);

            let names: Vec<_> = group.iter().map(|(name, _)| name).collect();
            assert_eq!(names, vec!["wlan0", "eth0"]);
        }

        #[test]
        fn addresses_flatten_in_group_order() {
            let group = group_of(&[
                ("wlan0", "192.168.1.2"),
                ("eth0", "10.0.0.1"),
                ("wlan0", "192.168.1.3"),
            ]);

            let all: Vec<_> = group.addresses().collect();
            assert_eq!(all, vec!["192.168.1.2", "192.168.1.3", "10.0.0.1"]);
            assert_eq!(group.address_count(), 3);
        }

        #[test]
        fn get_unknown_interface_is_none() {
            let group = group_of(&[("eth0", "10.0.0.1")]);
            assert!(group.get("eth1").is_none());
        }
    }

    mod address_report {
        use super::*;

        #[test]
        fn sections_are_ipv4_then_ipv6() {
            let mut report = AddressReport::default();
            report.set(AddressFamily::V6, group_of(&[("eth0", "2001:db8::1")]));
            report.set(AddressFamily::V4, group_of(&[("eth0", "10.0.0.1")]));

            let families: Vec<_> = report.sections().map(|(family, _)| family).collect();
            assert_eq!(families, vec![AddressFamily::V4, AddressFamily::V6]);
        }

        #[test]
        fn unrequested_family_has_no_section() {
            let mut report = AddressReport::default();
            report.set(AddressFamily::V6, InterfaceAddressGroup::new());

            assert_eq!(report.sections().count(), 1);
            assert!(report.ipv4.is_none());
        }

        #[test]
        fn flat_addresses_put_ipv4_first() {
            let mut report = AddressReport::default();
            report.set(AddressFamily::V6, group_of(&[("eth0", "2001:db8::1")]));
            report.set(
                AddressFamily::V4,
                group_of(&[("eth1", "10.0.1.1"), ("eth0", "10.0.0.1")]),
            );

            let flat: Vec<_> = report.flat_addresses().collect();
            assert_eq!(flat, vec!["10.0.1.1", "10.0.0.1", "2001:db8::1"]);
        }
    }
}
