//! Production interface enumeration built on `pnet`.

use pnet::datalink;

use super::{Adapter, AddressEntry, InterfaceSource, SourceError, ZERO_MAC};

/// Production [`InterfaceSource`] backed by [`pnet::datalink::interfaces`].
///
/// Reports every adapter known to the host networking stack, including
/// loopback and virtual adapters; the classifier applies the filtering
/// rules. Interfaces without a hardware address are reported with
/// [`ZERO_MAC`], which the filter treats as the virtual-adapter sentinel.
///
/// # Example
///
/// ```no_run
/// use lanwan::net::{InterfaceSource, SystemSource};
///
/// let source = SystemSource::new();
/// for adapter in source.enumerate().unwrap() {
///     println!("{}: {} addresses", adapter.name, adapter.addresses.len());
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource {
    // No configuration needed yet, but the struct allows future extension
    _private: (),
}

impl SystemSource {
    /// Creates a new system interface source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceSource for SystemSource {
    fn enumerate(&self) -> Result<Vec<Adapter>, SourceError> {
        let adapters = datalink::interfaces()
            .into_iter()
            .map(|iface| {
                let mac = iface
                    .mac
                    .map_or(ZERO_MAC, |m| [m.0, m.1, m.2, m.3, m.4, m.5]);
                let internal = iface.is_loopback();
                let addresses = iface
                    .ips
                    .iter()
                    .map(|net| AddressEntry::new(net.ip(), net.mask(), mac, internal))
                    .collect();
                Adapter::new(iface.name, addresses)
            })
            .collect();
        Ok(adapters)
    }
}
