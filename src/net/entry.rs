//! Raw adapter address model, as reported by an [`InterfaceSource`].
//!
//! [`InterfaceSource`]: super::InterfaceSource

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// MAC sentinel reported for virtual adapters with no hardware address.
pub const ZERO_MAC: [u8; 6] = [0; 6];

/// One raw address entry on an adapter, before any filtering.
///
/// Entries are produced fresh on every enumeration and are immutable once
/// produced. The address family is carried by the [`IpAddr`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    /// The configured address (IPv4 or IPv6).
    pub addr: IpAddr,
    /// The network mask for this address, same family as `addr`.
    pub netmask: IpAddr,
    /// Hardware address of the owning adapter, [`ZERO_MAC`] when absent.
    pub mac: [u8; 6],
    /// True for loopback adapters.
    pub internal: bool,
}

impl AddressEntry {
    /// Creates a new raw address entry.
    #[must_use]
    pub const fn new(addr: IpAddr, netmask: IpAddr, mac: [u8; 6], internal: bool) -> Self {
        Self {
            addr,
            netmask,
            mac,
            internal,
        }
    }

    /// Returns true if the owning adapter reports a real hardware address.
    #[must_use]
    pub fn has_hardware_address(&self) -> bool {
        self.mac != ZERO_MAC
    }
}

/// A named adapter together with its ordered raw address entries.
///
/// Entry order matches the order the host reported the addresses in;
/// classification preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adapter {
    /// The adapter identifier (e.g., "eth0", "Ethernet").
    pub name: String,
    /// All raw address entries on this adapter, in discovery order.
    pub addresses: Vec<AddressEntry>,
}

impl Adapter {
    /// Creates a new adapter with the given entries.
    #[must_use]
    pub fn new(name: impl Into<String>, addresses: Vec<AddressEntry>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4_entry(addr: &str, mac: [u8; 6], internal: bool) -> AddressEntry {
        AddressEntry::new(
            addr.parse().unwrap(),
            "255.255.255.0".parse().unwrap(),
            mac,
            internal,
        )
    }

    #[test]
    fn zero_mac_has_no_hardware_address() {
        let entry = v4_entry("10.0.0.5", ZERO_MAC, false);
        assert!(!entry.has_hardware_address());
    }

    #[test]
    fn nonzero_mac_has_hardware_address() {
        let entry = v4_entry("10.0.0.5", [0xde, 0xad, 0xbe, 0xef, 0, 1], false);
        assert!(entry.has_hardware_address());
    }

    #[test]
    fn equality_requires_same_entry_order() {
        let a = v4_entry("10.0.0.1", ZERO_MAC, false);
        let b = v4_entry("10.0.0.2", ZERO_MAC, false);

        let forward = Adapter::new("eth0", vec![a.clone(), b.clone()]);
        let reversed = Adapter::new("eth0", vec![b, a]);

        assert_ne!(forward, reversed);
    }
}
