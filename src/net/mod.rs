//! Network layer for enumerating and representing raw adapter addresses.
//!
//! This module provides types and traits for:
//! - Representing one adapter's raw address entries ([`Adapter`], [`AddressEntry`])
//! - The interface enumeration contract ([`InterfaceSource`])
//! - The production enumerator built on `pnet` ([`SystemSource`])

mod entry;
mod source;
mod system;

pub use entry::{Adapter, AddressEntry, ZERO_MAC};
pub use source::{InterfaceSource, SourceError};
pub use system::SystemSource;
