//! lanwan: LAN/WAN interface address classification
//!
//! A library for enumerating a host's network interfaces and classifying
//! each assigned IPv4 address as LAN (private range) or WAN (public),
//! coalescing repeated queries with a one-turn cache.

pub mod classify;
pub mod net;
pub mod sched;
