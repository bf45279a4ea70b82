//! Caching query front end over an [`InterfaceSource`].

use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::{InterfaceSource, SourceError, SystemSource};
use crate::sched::{TickScheduler, TokioScheduler};

use super::snapshot::{AddressQuery, InterfaceRecord, QueryResult, classify_adapters};

/// Classifies host interface addresses, caching the result for one turn.
///
/// A cache miss enumerates the source once, classifies, stores the snapshot,
/// and schedules a clearing callback on the next turn of the injected
/// [`TickScheduler`]. Calls made back-to-back in the same synchronous turn
/// observe the identical snapshot and pay the enumeration cost once; calls
/// in later turns re-enumerate.
///
/// # Example
///
/// ```
/// use lanwan::classify::Classifier;
/// use lanwan::net::{Adapter, InterfaceSource, SourceError};
/// use lanwan::sched::InlineScheduler;
///
/// struct NoAdapters;
///
/// impl InterfaceSource for NoAdapters {
///     fn enumerate(&self) -> Result<Vec<Adapter>, SourceError> {
///         Ok(vec![])
///     }
/// }
///
/// let classifier = Classifier::new(NoAdapters, InlineScheduler);
/// assert!(classifier.lan_address().unwrap().is_none());
/// assert!(classifier.wan_addresses().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct Classifier<S, T = TokioScheduler> {
    source: S,
    scheduler: T,
    cache: Arc<Mutex<Option<QueryResult>>>,
}

impl Default for Classifier<SystemSource, TokioScheduler> {
    fn default() -> Self {
        Self::system()
    }
}

impl Classifier<SystemSource, TokioScheduler> {
    /// Creates a classifier over the host's real interfaces.
    ///
    /// Requires a tokio runtime for the end-of-turn cache clearing. Query
    /// coalescing needs a current-thread runtime; on a multi-thread runtime
    /// every query re-enumerates (see [`TokioScheduler`]).
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemSource::new(), TokioScheduler)
    }
}

impl<S: InterfaceSource> Classifier<S, TokioScheduler> {
    /// Creates a classifier over `source` with the tokio turn scheduler.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self::new(source, TokioScheduler)
    }
}

impl<S: InterfaceSource, T: TickScheduler> Classifier<S, T> {
    /// Creates a classifier with an explicit source and turn scheduler.
    #[must_use]
    pub fn new(source: S, scheduler: T) -> Self {
        Self {
            source,
            scheduler,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the classification snapshot for the current turn.
    ///
    /// Idempotent within a turn: repeated calls before the turn ends return
    /// a structurally identical snapshot without re-enumerating.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source unchanged. A
    /// failed enumeration leaves the cache empty.
    pub fn query_interfaces(&self) -> Result<QueryResult, SourceError> {
        if let Some(cached) = self.lock_cache().as_ref() {
            tracing::trace!("interface query served from cache");
            return Ok(cached.clone());
        }

        let adapters = self.source.enumerate()?;
        let result = classify_adapters(&adapters);
        tracing::debug!(
            adapters = adapters.len(),
            lan = result.lan.len(),
            wan = result.wan.len(),
            "classified fresh interface snapshot"
        );

        *self.lock_cache() = Some(result.clone());
        let slot = Arc::clone(&self.cache);
        self.scheduler.defer(Box::new(move || {
            slot.lock().unwrap_or_else(PoisonError::into_inner).take();
        }));

        Ok(result)
    }

    /// Returns the address-only snapshot for the current turn.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn query_addresses(&self) -> Result<AddressQuery, SourceError> {
        Ok(self.query_interfaces()?.to_address_query())
    }

    /// Returns all LAN records in discovery order.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn lan_interfaces(&self) -> Result<Vec<InterfaceRecord>, SourceError> {
        Ok(self.query_interfaces()?.lan)
    }

    /// Returns all WAN records in discovery order.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn wan_interfaces(&self) -> Result<Vec<InterfaceRecord>, SourceError> {
        Ok(self.query_interfaces()?.wan)
    }

    /// Returns the first LAN record, or `None` when no LAN address survived
    /// filtering.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn lan_interface(&self) -> Result<Option<InterfaceRecord>, SourceError> {
        Ok(self.query_interfaces()?.first_lan().cloned())
    }

    /// Returns the first WAN record, or `None` when no WAN address survived
    /// filtering.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn wan_interface(&self) -> Result<Option<InterfaceRecord>, SourceError> {
        Ok(self.query_interfaces()?.first_wan().cloned())
    }

    /// Returns all LAN addresses in discovery order.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn lan_addresses(&self) -> Result<Vec<Ipv4Addr>, SourceError> {
        Ok(self.query_interfaces()?.lan_addresses())
    }

    /// Returns all WAN addresses in discovery order.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn wan_addresses(&self) -> Result<Vec<Ipv4Addr>, SourceError> {
        Ok(self.query_interfaces()?.wan_addresses())
    }

    /// Returns the first LAN address, or `None` when there is none.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn lan_address(&self) -> Result<Option<Ipv4Addr>, SourceError> {
        Ok(self.lan_interface()?.map(|r| r.addr))
    }

    /// Returns the first WAN address, or `None` when there is none.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceError`] from the interface source.
    pub fn wan_address(&self) -> Result<Option<Ipv4Addr>, SourceError> {
        Ok(self.wan_interface()?.map(|r| r.addr))
    }

    /// Clears the cache slot immediately.
    ///
    /// The scheduled end-of-turn callback still fires and is a no-op on the
    /// already-empty slot. Exists so tests and long-running turns can force
    /// a fresh enumeration deterministically.
    pub fn clear_cache(&self) {
        self.lock_cache().take();
    }

    /// Returns a reference to the underlying interface source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    fn lock_cache(&self) -> MutexGuard<'_, Option<QueryResult>> {
        // Recoverable: the guarded state is a plain value.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
