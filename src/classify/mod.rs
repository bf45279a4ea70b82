//! Address classification and the one-turn query cache.
//!
//! This module provides:
//! - Pure LAN/WAN/APIPA predicates and broadcast arithmetic ([`rules`])
//! - The filtered snapshot model ([`InterfaceRecord`], [`QueryResult`])
//! - The caching query front end ([`Classifier`])

mod classifier;
mod rules;
mod snapshot;


pub use classifier::Classifier;
pub use rules::{broadcast_address, is_apipa, is_lan_address, is_wan_address};
pub use snapshot::{AddressQuery, InterfaceRecord, QueryResult, classify_adapters};
