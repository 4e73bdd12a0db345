//! Lifetime-aware (weak-hold) eviction decorator.
//!
//! Wraps any [`Store`] and stores values behind a weak hold, so a value
//! with no strong owner left anywhere may be reclaimed by the
//! [`Reclaimer`]. A bounded pin ring keeps recently read values strongly
//! reachable for a while after each read, and every mutating entry point
//! drains the reclamation-notification channel to purge keys whose values
//! are gone.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                        WeakCache<K, T, S> Layout                     │
//! │                                                                      │
//! │   delegate: S             Store<K, WeakHold<T>>                      │
//! │   pinned: PinRing<Arc<T>> strong refs for recent reads (≤ pin_count) │
//! │   reclaimer: Arc<Reclaimer<K, T>>  custody + notification queue      │
//! │                                                                      │
//! │   put(k, v):  drain ─► register(k, v) ─► delegate.put(k, weak hold)  │
//! │                                                                      │
//! │   get(k):     delegate.get(k)                                        │
//! │                  absent ──────────────────► None                     │
//! │                  hold dead ─► remove(k) ──► None                     │
//! │                  hold live ─► pin value ──► Some(value)              │
//! │                                                                      │
//! │   remove/len/clear: drain first, then forward                        │
//! └──────────────────────────────────────────────────────────────────────┘
//!
//! Value lifecycle
//! ───────────────
//!
//!   Stored(weak) ──get──► Pinned ──ages out of ring──► Stored(weak)
//!        │                                                  │
//!        └────────── sweep finds no strong owner ◄──────────┘
//!                              │
//!                              ▼
//!                  Reclaimed (key purged on next drain,
//!                   or found absent inside get)
//! ```
//!
//! ## Reclamation Timing
//!
//! Nothing here assumes any latency between a value losing its last
//! strong owner and its key surfacing on the notification channel; a
//! notification may arrive arbitrarily late, and
//! [`Reclaimer::collect`] is the synchronous hook that produces one on
//! demand. A notification for a key is honored only if the entry stored
//! under that key is itself dead; a newer live entry that reused the key
//! is left in place.
//!
//! ## Size Semantics
//!
//! `len` drains the channel first and is therefore only an upper bound:
//! values may lose their last strong owner between calls.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use cachewrap::decorator::weak::WeakCache;
//! use cachewrap::store::MemoryStore;
//! use cachewrap::traits::Store;
//!
//! let mut cache = WeakCache::with_pin_count(MemoryStore::new("blobs"), 0);
//! let reclaimer = cache.reclaimer();
//!
//! cache.put("k", Arc::new("payload".to_string()));
//! assert_eq!(cache.get(&"k").as_deref().map(String::as_str), Some("payload"));
//!
//! // No strong owner outside the reclaimer: a sweep reclaims it.
//! reclaimer.collect();
//! assert_eq!(cache.get(&"k"), None);
//! assert_eq!(cache.len(), 0);
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe; compose under
//! [`SyncCache`](crate::decorator::sync::SyncCache) for concurrent access.

use std::sync::Arc;

use crate::ds::PinRing;
use crate::reclaim::{Reclaimer, WeakHold};
use crate::traits::{Store, StoreMetrics};

/// Default number of recently read values kept strongly reachable.
pub const DEFAULT_PIN_COUNT: usize = 256;

/// Weak-hold eviction decorator.
///
/// # Type Parameters
///
/// - `K`: Key type, `Clone` (cloned into the reclaimer's custody ledger)
/// - `T`: Value payload; the decorator's surface currency is `Arc<T>`
/// - `S`: The wrapped [`Store`], which holds only [`WeakHold`] entries
///   once this decorator is in use
///
/// # Invariant
///
/// Every value handed out by `get` is strongly reachable at the moment it
/// is returned: either it was already pinned, or that `get` just promoted
/// it into the pin ring (and the caller now holds a clone besides).
#[derive(Debug)]
pub struct WeakCache<K, T, S>
where
    S: Store<K, WeakHold<T>>,
{
    delegate: S,
    pinned: PinRing<Arc<T>>,
    reclaimer: Arc<Reclaimer<K, T>>,
}

impl<K, T, S> WeakCache<K, T, S>
where
    K: Clone,
    S: Store<K, WeakHold<T>>,
{
    /// Wraps `delegate` with the default pin count (256).
    pub fn new(delegate: S) -> Self {
        Self::with_pin_count(delegate, DEFAULT_PIN_COUNT)
    }

    /// Wraps `delegate` with an explicit pin count.
    ///
    /// A pin count of zero disables read pinning entirely.
    pub fn with_pin_count(delegate: S, pin_count: usize) -> Self {
        Self {
            delegate,
            pinned: PinRing::new(pin_count),
            reclaimer: Arc::new(Reclaimer::new()),
        }
    }

    /// Returns how many recently read values are kept strongly reachable.
    #[inline]
    pub fn pin_count(&self) -> usize {
        self.pinned.limit()
    }

    /// Replaces the pin count; overflow pins are released immediately.
    pub fn set_pin_count(&mut self, pin_count: usize) {
        self.pinned.set_limit(pin_count);
    }

    /// Returns the number of values currently pinned.
    #[inline]
    pub fn pinned(&self) -> usize {
        self.pinned.len()
    }

    /// Returns a handle to the reclaimer driving this cache.
    ///
    /// Embedders (and tests) use it to run
    /// [`collect`](Reclaimer::collect) sweeps.
    pub fn reclaimer(&self) -> Arc<Reclaimer<K, T>> {
        Arc::clone(&self.reclaimer)
    }

    /// Consumes the decorator and returns the wrapped store.
    pub fn into_inner(self) -> S {
        self.delegate
    }

    /// Purges every notified key whose stored entry is actually dead.
    ///
    /// A key may have been re-put since its old value was reclaimed; the
    /// live replacement entry is left untouched.
    fn drain_reclaimed(&mut self) {
        while let Some(key) = self.reclaimer.poll_reclaimed() {
            let stale = match self.delegate.get(&key) {
                Some(hold) => hold.upgrade().is_none(),
                None => false,
            };
            if stale {
                self.delegate.remove(&key);
            }
        }
    }
}

impl<K, T, S> Store<K, Arc<T>> for WeakCache<K, T, S>
where
    K: Clone,
    S: Store<K, WeakHold<T>>,
{
    /// Returns the wrapped store's identifier.
    fn id(&self) -> &str {
        self.delegate.id()
    }

    /// Drains stale keys, then stores the value behind a weak hold.
    ///
    /// The reclaimer takes custody of the value, so it stays alive until
    /// a sweep finds it unreachable from the pin ring and every caller.
    fn put(&mut self, key: K, value: Arc<T>) {
        self.drain_reclaimed();
        let hold = self.reclaimer.register(key.clone(), &value);
        self.delegate.put(key, hold);
    }

    /// Resolves the weak hold and pins the value on success.
    ///
    /// A dead hold is cleaned up on the spot and reported as a miss;
    /// reclamation is never an error.
    fn get(&mut self, key: &K) -> Option<Arc<T>> {
        let hold = self.delegate.get(key)?;
        match hold.upgrade() {
            Some(value) => {
                self.pinned.pin(Arc::clone(&value));
                Some(value)
            }
            None => {
                self.delegate.remove(key);
                None
            }
        }
    }

    /// Drains stale keys, then removes and resolves the entry.
    ///
    /// Returns the value if it is still live, `None` otherwise. Any pin
    /// the value holds in the ring is left to age out naturally.
    fn remove(&mut self, key: &K) -> Option<Arc<T>> {
        self.drain_reclaimed();
        self.delegate.remove(key).and_then(|hold| hold.upgrade())
    }

    /// Drains stale keys, then reports the wrapped store's entry count.
    ///
    /// An upper bound: values may become unreachable between calls.
    fn len(&mut self) -> usize {
        self.drain_reclaimed();
        self.delegate.len()
    }

    /// Releases all pins, drains stale keys, then clears the store.
    fn clear(&mut self) {
        self.pinned.clear();
        self.drain_reclaimed();
        self.delegate.clear();
    }

    /// Passes the wrapped store's counters through.
    fn metrics(&self) -> StoreMetrics {
        self.delegate.metrics()
    }

    /// Forwards eviction accounting to the wrapped store.
    fn record_eviction(&self) {
        self.delegate.record_eviction();
    }
}
