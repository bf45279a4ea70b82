//! Pure IPv4 classification predicates and broadcast arithmetic.
//!
//! All functions here are side-effect free and operate on parsed
//! [`Ipv4Addr`] values; malformed text fails at `str::parse` with
//! [`std::net::AddrParseError`] before it can reach a predicate.

use std::net::Ipv4Addr;

/// Raw private-range test: 10.0.0.0/8, 172.16.0.0/12, or 192.168.0.0/16.
///
/// The 172 case tests the high nibble of the second octet, which is exactly
/// `16 <= b1 <= 31`. Agrees with [`Ipv4Addr::is_private`].
fn lan_range(addr: Ipv4Addr) -> bool {
    let [b0, b1, _, _] = addr.octets();
    b0 == 10 || (b0 == 172 && (b1 >> 4) == 1) || (b0 == 192 && b1 == 168)
}

/// Returns true if `addr` is an APIPA (self-assigned 169.254.0.0/16) address.
///
/// APIPA addresses are a locally-assigned fallback belonging to neither LAN
/// nor WAN, so [`is_lan_address`] and [`is_wan_address`] both reject them.
#[must_use]
pub const fn is_apipa(addr: Ipv4Addr) -> bool {
    // 169.254.0.0/16 is precisely the IPv4 link-local block.
    addr.is_link_local()
}

/// Returns true if `addr` is a private-range address and not APIPA.
///
/// # Example
///
/// ```
/// use lanwan::classify::is_lan_address;
///
/// assert!(is_lan_address("192.168.1.10".parse().unwrap()));
/// assert!(!is_lan_address("8.8.8.8".parse().unwrap()));
/// assert!(!is_lan_address("169.254.1.2".parse().unwrap()));
/// ```
#[must_use]
pub fn is_lan_address(addr: Ipv4Addr) -> bool {
    lan_range(addr) && !is_apipa(addr)
}

/// Returns true if `addr` is outside the private ranges and not APIPA.
///
/// # Example
///
/// ```
/// use lanwan::classify::is_wan_address;
///
/// assert!(is_wan_address("8.8.8.8".parse().unwrap()));
/// assert!(!is_wan_address("10.1.2.3".parse().unwrap()));
/// assert!(!is_wan_address("169.254.1.2".parse().unwrap()));
/// ```
#[must_use]
pub fn is_wan_address(addr: Ipv4Addr) -> bool {
    !lan_range(addr) && !is_apipa(addr)
}

/// Computes the IPv4 broadcast address for an address/netmask pair.
///
/// Every host bit (where the netmask is 0) is set to 1; the masked network
/// bits are kept unchanged.
///
/// # Example
///
/// ```
/// use lanwan::classify::broadcast_address;
///
/// let broadcast = broadcast_address(
///     "192.168.1.5".parse().unwrap(),
///     "255.255.255.0".parse().unwrap(),
/// );
/// assert_eq!(broadcast, "192.168.1.255".parse::<std::net::Ipv4Addr>().unwrap());
/// ```
#[must_use]
pub fn broadcast_address(addr: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Addr {
    let mask = u32::from(netmask);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}
