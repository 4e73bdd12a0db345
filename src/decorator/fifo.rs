//! FIFO (first in, first out) bounded-admission decorator.
//!
//! Wraps any [`Store`] and bounds its occupancy: keys are admitted in
//! insertion order, and once the admission queue exceeds the configured
//! capacity, the oldest admitted key is evicted from the wrapped store.
//! Pure FIFO admission, not LRU: recency of read never extends a key's
//! life.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FifoCache<K, V, S> Layout                        │
//! │                                                                         │
//! │   delegate: S (the wrapped Store)                                       │
//! │   admission: AdmissionQueue<K>          capacity: usize (default 1024)  │
//! │                                                                         │
//! │   put("E", v):                                                          │
//! │     1. admit "E" at the tail                                            │
//! │     2. queue over capacity? pop head key, delegate.remove(it)           │
//! │     3. delegate.put("E", v)                                             │
//! │                                                                         │
//! │      admission: [A] [B] [C] [D] ──admit E──► [B] [C] [D] [E]            │
//! │                  ▲                                                      │
//! │                evicted from delegate                                    │
//! │                                                                         │
//! │   get(k):    passthrough, admission order untouched                     │
//! │   remove(k): passthrough + queue bookkeeping per AdmissionMode          │
//! │   clear():   clears delegate and admission queue together               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation | Cost              | Notes                                   |
//! |-----------|-------------------|-----------------------------------------|
//! | `put`     | O(1) + queue cost | May evict an unrelated key's value       |
//! | `get`     | delegate cost     | Invisible to admission order             |
//! | `remove`  | delegate cost     | Queue pruning depends on `AdmissionMode` |
//! | `clear`   | O(n)              | Delegate and queue together              |
//!
//! ## Admission Bookkeeping
//!
//! The reference behavior this decorator descends from appends a queue slot
//! on *every* put and never prunes on remove, so a re-inserted key occupies
//! several capacity slots and a removed key later "evicts" nothing. That
//! bookkeeping survives here as [`AdmissionMode::PerPut`] for deployments
//! that depend on it; the default [`AdmissionMode::Unique`] deduplicates on
//! re-put (move-to-tail) and prunes on remove. Both are tested side by side
//! in this module.
//!
//! ## Example Usage
//!
//! ```
//! use cachewrap::decorator::fifo::FifoCache;
//! use cachewrap::store::MemoryStore;
//! use cachewrap::traits::Store;
//!
//! let mut cache = FifoCache::try_with_capacity(MemoryStore::new("pages"), 2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // "a" ages out
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(2));
//! assert_eq!(cache.get(&"c"), Some(3));
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe; compose under
//! [`SyncCache`](crate::decorator::sync::SyncCache) for concurrent access.

use crate::ds::{AdmissionMode, AdmissionQueue};
use crate::error::ConfigError;
use crate::traits::{Store, StoreMetrics};

/// Default admission capacity.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Bounded-FIFO eviction decorator.
///
/// # Type Parameters
///
/// - `K`: Key type, `Clone + Eq` (cloned into the admission queue)
/// - `V`: Value type, whatever the wrapped store holds
/// - `S`: The wrapped [`Store`]
///
/// # Eviction Behavior
///
/// Eviction is a side effect of `put`: the caller inserting key `E` may
/// silently remove key `A` from the wrapped store because `A` was admitted
/// first. Eviction failure is impossible by construction; the queue and the
/// delegate are mutated together.
#[derive(Debug)]
pub struct FifoCache<K, V, S>
where
    S: Store<K, V>,
{
    delegate: S,
    admission: AdmissionQueue<K>,
    capacity: usize,
    _values: std::marker::PhantomData<V>,
}

impl<K, V, S> FifoCache<K, V, S>
where
    K: Clone + Eq,
    S: Store<K, V>,
{
    /// Wraps `delegate` with the default capacity (1024) and
    /// [`AdmissionMode::Unique`] bookkeeping.
    pub fn new(delegate: S) -> Self {
        Self::with_admission_mode(delegate, AdmissionMode::Unique)
    }

    /// Wraps `delegate` with the default capacity and an explicit
    /// bookkeeping mode.
    pub fn with_admission_mode(delegate: S, mode: AdmissionMode) -> Self {
        Self {
            delegate,
            admission: AdmissionQueue::new(mode),
            capacity: DEFAULT_CAPACITY,
            _values: std::marker::PhantomData,
        }
    }

    /// Wraps `delegate` with an explicit capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_with_capacity(delegate: S, capacity: usize) -> Result<Self, ConfigError> {
        let mut cache = Self::new(delegate);
        cache.set_capacity(capacity)?;
        Ok(cache)
    }

    /// Returns the admission capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replaces the admission capacity; takes effect on the next `put`.
    ///
    /// Shrinking below the current occupancy does not evict immediately;
    /// the next `put` drains the queue back under the new bound.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("admission capacity must be > 0"));
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Returns the admission bookkeeping mode.
    #[inline]
    pub fn admission_mode(&self) -> AdmissionMode {
        self.admission.mode()
    }

    /// Returns the number of occupied admission slots.
    ///
    /// Under [`AdmissionMode::PerPut`] this can exceed the number of live
    /// keys in the wrapped store.
    #[inline]
    pub fn admitted(&self) -> usize {
        self.admission.len()
    }

    /// Consumes the decorator and returns the wrapped store.
    pub fn into_inner(self) -> S {
        self.delegate
    }

    /// Admits a key and evicts from the head until back within capacity.
    ///
    /// A loop rather than a single pop: a capacity shrink can leave the
    /// queue more than one slot over the bound.
    fn cycle_admission(&mut self, key: K) {
        self.admission.admit(key);
        while self.admission.len() > self.capacity {
            match self.admission.pop_oldest() {
                Some(oldest) => {
                    if self.delegate.remove(&oldest).is_some() {
                        self.delegate.record_eviction();
                    }
                }
                None => break,
            }
        }

        #[cfg(debug_assertions)]
        self.admission.validate_invariants();
    }
}

impl<K, V, S> Store<K, V> for FifoCache<K, V, S>
where
    K: Clone + Eq,
    S: Store<K, V>,
{
    /// Returns the wrapped store's identifier.
    fn id(&self) -> &str {
        self.delegate.id()
    }

    /// Admits the key, evicts the oldest on overflow, then forwards.
    fn put(&mut self, key: K, value: V) {
        self.cycle_admission(key.clone());
        self.delegate.put(key, value);
    }

    /// Pure passthrough; reads are invisible to the admission queue.
    fn get(&mut self, key: &K) -> Option<V> {
        self.delegate.get(key)
    }

    /// Forwards the removal; queue pruning depends on the admission mode.
    fn remove(&mut self, key: &K) -> Option<V> {
        self.admission.forget(key);
        self.delegate.remove(key)
    }

    /// Returns the wrapped store's entry count.
    fn len(&mut self) -> usize {
        self.delegate.len()
    }

    /// Clears the wrapped store and the admission queue together.
    fn clear(&mut self) {
        self.delegate.clear();
        self.admission.clear();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn bounded(capacity: usize) -> FifoCache<&'static str, u64, MemoryStore<&'static str, u64>> {
        FifoCache::try_with_capacity(MemoryStore::new("fifo-test"), capacity).unwrap()
    }

    // ==============================================
    // Basic Operations
    // ==============================================

    mod basic_operations {
        use super::*;

        #[test]
        fn new_cache_is_empty_with_default_capacity() {
            let mut cache: FifoCache<u64, u64, _> = FifoCache::new(MemoryStore::new("s"));
            assert!(cache.is_empty());
            assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
            assert_eq!(cache.admission_mode(), AdmissionMode::Unique);
        }

        #[test]
        fn id_passes_through_to_the_delegate() {
            let cache: FifoCache<u64, u64, _> = FifoCache::new(MemoryStore::new("backing"));
            assert_eq!(cache.id(), "backing");
        }

        #[test]
        fn put_and_get_round_trip() {
            let mut cache = bounded(4);
            cache.put("k", 42);
            assert_eq!(cache.get(&"k"), Some(42));
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn get_missing_key_returns_none() {
            let mut cache = bounded(4);
            assert_eq!(cache.get(&"missing"), None);
        }

        #[test]
        fn remove_returns_the_value_once() {
            let mut cache = bounded(4);
            cache.put("k", 1);
            assert_eq!(cache.remove(&"k"), Some(1));
            assert_eq!(cache.remove(&"k"), None);
            assert_eq!(cache.remove(&"k"), None);
        }

        #[test]
        fn clear_resets_store_and_admission_queue() {
            let mut cache = bounded(4);
            cache.put("a", 1);
            cache.put("b", 2);

            cache.clear();

            assert!(cache.is_empty());
            assert_eq!(cache.admitted(), 0);
            assert_eq!(cache.get(&"a"), None);
            assert_eq!(cache.get(&"b"), None);
        }

        #[test]
        fn into_inner_returns_the_delegate() {
            let mut cache = bounded(4);
            cache.put("a", 1);
            let mut store = cache.into_inner();
            assert_eq!(store.get(&"a"), Some(1));
        }
    }

    // ==============================================
    // FIFO Eviction
    // ==============================================

    mod eviction_behavior {
        use super::*;

        #[test]
        fn capacity_two_scenario() {
            let mut cache = bounded(2);
            cache.put("A", 1);
            cache.put("B", 2);
            cache.put("C", 3);

            assert_eq!(cache.get(&"A"), None);
            assert_eq!(cache.get(&"B"), Some(2));
            assert_eq!(cache.get(&"C"), Some(3));
        }

        #[test]
        fn evicts_exactly_the_first_inserted_key() {
            let capacity = 8;
            let mut cache: FifoCache<u64, u64, _> =
                FifoCache::try_with_capacity(MemoryStore::new("s"), capacity).unwrap();

            for i in 0..=(capacity as u64) {
                cache.put(i, i * 10);
            }

            assert_eq!(cache.get(&0), None, "only the oldest key is evicted");
            for i in 1..=(capacity as u64) {
                assert_eq!(cache.get(&i), Some(i * 10));
            }
        }

        #[test]
        fn eviction_proceeds_in_insertion_order() {
            let mut cache = bounded(2);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3); // evicts a
            cache.put("d", 4); // evicts b

            assert_eq!(cache.get(&"a"), None);
            assert_eq!(cache.get(&"b"), None);
            assert_eq!(cache.get(&"c"), Some(3));
            assert_eq!(cache.get(&"d"), Some(4));
        }

        #[test]
        fn occupancy_never_exceeds_capacity_after_put() {
            let mut cache = bounded(3);
            for (i, key) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
                cache.put(key, i as u64);
                assert!(cache.len() <= 3);
                assert!(cache.admitted() <= 3);
            }
        }

        #[test]
        fn eviction_is_counted_on_the_delegate() {
            let mut cache = bounded(1);
            cache.put("a", 1);
            cache.put("b", 2);
            assert_eq!(cache.metrics().evictions, 1);
        }

        #[test]
        fn single_capacity_cache() {
            let mut cache = bounded(1);
            cache.put("a", 1);
            cache.put("b", 2);
            assert_eq!(cache.get(&"a"), None);
            assert_eq!(cache.get(&"b"), Some(2));
        }
    }

    // ==============================================
    // Reads Are Invisible To Admission
    // ==============================================

    mod get_behavior {
        use super::*;

        #[test]
        fn reads_never_extend_a_keys_life() {
            let mut cache = bounded(2);
            cache.put("a", 1);
            cache.put("b", 2);

            for _ in 0..100 {
                let _ = cache.get(&"a");
            }

            cache.put("c", 3);
            assert_eq!(cache.get(&"a"), None, "heavily read key still evicts first");
            assert_eq!(cache.get(&"b"), Some(2));
        }
    }

    // ==============================================
    // Capacity Configuration
    // ==============================================

    mod capacity_config {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected() {
            let err =
                FifoCache::<u64, u64, _>::try_with_capacity(MemoryStore::new("s"), 0).unwrap_err();
            assert!(err.to_string().contains("capacity"));

            let mut cache = bounded(2);
            assert!(cache.set_capacity(0).is_err());
            assert_eq!(cache.capacity(), 2, "failed setter leaves capacity alone");
        }

        #[test]
        fn set_capacity_takes_effect_on_next_put() {
            let mut cache = bounded(4);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3);

            cache.set_capacity(1).unwrap();
            assert_eq!(cache.len(), 3, "shrink does not evict immediately");

            cache.put("d", 4);
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.get(&"d"), Some(4));
        }

        #[test]
        fn growing_capacity_admits_more_keys() {
            let mut cache = bounded(1);
            cache.put("a", 1);
            cache.set_capacity(2).unwrap();
            cache.put("b", 2);

            assert_eq!(cache.get(&"a"), Some(1));
            assert_eq!(cache.get(&"b"), Some(2));
        }
    }

    // ==============================================
    // Unique Admission Bookkeeping (default)
    // ==============================================

    mod unique_admission {
        use super::*;

        #[test]
        fn reput_key_occupies_one_slot() {
            let mut cache = bounded(2);
            cache.put("a", 1);
            cache.put("a", 2);
            cache.put("a", 3);

            assert_eq!(cache.admitted(), 1);
            cache.put("b", 4);
            assert_eq!(cache.get(&"a"), Some(3));
            assert_eq!(cache.get(&"b"), Some(4));
        }

        #[test]
        fn reput_moves_key_to_the_tail() {
            let mut cache = bounded(2);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("a", 10); // "a" becomes newest
            cache.put("c", 3); // evicts "b", the current oldest

            assert_eq!(cache.get(&"b"), None);
            assert_eq!(cache.get(&"a"), Some(10));
            assert_eq!(cache.get(&"c"), Some(3));
        }

        #[test]
        fn remove_releases_the_admission_slot() {
            let mut cache = bounded(2);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.remove(&"a");
            cache.put("c", 3);

            // "a"'s slot was pruned, so "b" is not pushed out.
            assert_eq!(cache.get(&"b"), Some(2));
            assert_eq!(cache.get(&"c"), Some(3));
        }
    }

    // ==============================================
    // PerPut Admission Bookkeeping (legacy parity)
    // ==============================================

    mod per_put_admission {
        use super::*;

        fn legacy(capacity: usize) -> FifoCache<&'static str, u64, MemoryStore<&'static str, u64>>
        {
            let mut cache =
                FifoCache::with_admission_mode(MemoryStore::new("legacy"), AdmissionMode::PerPut);
            cache.set_capacity(capacity).unwrap();
            cache
        }

        #[test]
        fn reput_key_double_counts_against_capacity() {
            let mut cache = legacy(2);
            cache.put("a", 1);
            cache.put("a", 2); // second slot for "a"
            assert_eq!(cache.admitted(), 2);

            // The third put overflows; the popped slot is "a"'s first one,
            // which removes the live "a" entry before it is re-stored.
            cache.put("b", 3);
            assert_eq!(cache.admitted(), 2);
            assert_eq!(cache.get(&"a"), None, "stale slot evicted the live key");
            assert_eq!(cache.get(&"b"), Some(3));
        }

        #[test]
        fn removed_key_leaves_a_stale_slot() {
            let mut cache = legacy(2);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.remove(&"a");

            assert_eq!(cache.admitted(), 2, "remove does not prune the queue");

            // The next put pops "a"'s stale slot; nothing is evicted and
            // "b" survives even though the queue was nominally full.
            cache.put("c", 3);
            assert_eq!(cache.get(&"b"), Some(2));
            assert_eq!(cache.get(&"c"), Some(3));
            assert_eq!(cache.metrics().evictions, 0);
        }
    }
}
