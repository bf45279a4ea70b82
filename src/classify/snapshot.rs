//! Filtered classification snapshot model.

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

use crate::net::Adapter;

use super::rules::{is_apipa, is_lan_address};

/// One surviving IPv4 address entry, tagged with its owning adapter.
///
/// Every record in a [`QueryResult`] is IPv4, non-internal, carries a real
/// hardware address, and is not APIPA — the filter enforces these before a
/// record is constructed, so consumers never re-check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// The owning adapter's name.
    pub name: String,
    /// The configured IPv4 address.
    pub addr: Ipv4Addr,
    /// The network mask for this address.
    pub netmask: Ipv4Addr,
    /// The adapter's hardware address (never all-zero).
    pub mac: [u8; 6],
}

/// A classification snapshot: surviving records split into LAN and WAN.
///
/// Order within each sequence matches discovery order from the interface
/// source (adapter enumeration order, then within-adapter address order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Records whose address falls in a private range.
    pub lan: Vec<InterfaceRecord>,
    /// Records whose address is public.
    pub wan: Vec<InterfaceRecord>,
}

impl QueryResult {
    /// Returns the LAN addresses in discovery order.
    #[must_use]
    pub fn lan_addresses(&self) -> Vec<Ipv4Addr> {
        self.lan.iter().map(|r| r.addr).collect()
    }

    /// Returns the WAN addresses in discovery order.
    #[must_use]
    pub fn wan_addresses(&self) -> Vec<Ipv4Addr> {
        self.wan.iter().map(|r| r.addr).collect()
    }

    /// Returns the first LAN record, if any survived filtering.
    #[must_use]
    pub fn first_lan(&self) -> Option<&InterfaceRecord> {
        self.lan.first()
    }

    /// Returns the first WAN record, if any survived filtering.
    #[must_use]
    pub fn first_wan(&self) -> Option<&InterfaceRecord> {
        self.wan.first()
    }

    /// Projects this snapshot down to addresses only.
    #[must_use]
    pub fn to_address_query(&self) -> AddressQuery {
        AddressQuery {
            lan: self.lan_addresses(),
            wan: self.wan_addresses(),
        }
    }
}

/// Address-only projection of a [`QueryResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    /// LAN addresses in discovery order.
    pub lan: Vec<Ipv4Addr>,
    /// WAN addresses in discovery order.
    pub wan: Vec<Ipv4Addr>,
}

/// Filters and classifies a raw enumeration snapshot.
///
/// Per raw entry: discard when internal, non-IPv4, zero-MAC, or APIPA;
/// survivors are tagged with the adapter name and appended to the LAN or
/// WAN sequence in discovery order.
#[must_use]
pub fn classify_adapters(adapters: &[Adapter]) -> QueryResult {
    let mut result = QueryResult::default();

    for adapter in adapters {
        for entry in &adapter.addresses {
            if entry.internal || !entry.has_hardware_address() {
                continue;
            }
            let (IpAddr::V4(addr), IpAddr::V4(netmask)) = (entry.addr, entry.netmask) else {
                continue;
            };
            if is_apipa(addr) {
                continue;
            }

            let record = InterfaceRecord {
                name: adapter.name.clone(),
                addr,
                netmask,
                mac: entry.mac,
            };
            if is_lan_address(addr) {
                result.lan.push(record);
            } else {
                result.wan.push(record);
            }
        }
    }

    result
}
