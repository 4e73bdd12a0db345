//! Mutual-exclusion decorator for sharing a stack across threads.
//!
//! The eviction decorators perform no internal locking; they assume a
//! single writer at a time. `SyncCache` is the synchronizing layer that
//! assumption points at: it owns the wrapped stack behind a
//! [`parking_lot::Mutex`] and serializes every operation through `&self`,
//! so an `Arc<SyncCache<_>>` can be handed to any number of threads.
//!
//! ## Architecture
//!
//! ```text
//!   thread A ──┐
//!   thread B ──┼──► SyncCache (Mutex) ──► FifoCache ──► MemoryStore
//!   thread C ──┘        one op at a time
//! ```
//!
//! Always the outermost layer. Locking underneath another decorator would
//! serialize only backend access while leaving the decorator bookkeeping
//! unsynchronized.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use cachewrap::decorator::fifo::FifoCache;
//! use cachewrap::decorator::sync::SyncCache;
//! use cachewrap::store::MemoryStore;
//!
//! let cache = Arc::new(SyncCache::new(FifoCache::try_with_capacity(
//!     MemoryStore::new("shared"),
//!     64,
//! )
//! .unwrap()));
//!
//! let writer = Arc::clone(&cache);
//! std::thread::spawn(move || writer.put(1u64, "from-thread"))
//!     .join()
//!     .unwrap();
//!
//! assert_eq!(cache.get(&1), Some("from-thread"));
//! ```

use parking_lot::Mutex;

use crate::traits::{Store, StoreMetrics};

/// Serializing wrapper around a decorator stack.
///
/// All operations lock, forward, and unlock; semantics are exactly those
/// of the wrapped [`Store`].
#[derive(Debug)]
pub struct SyncCache<S> {
    inner: Mutex<S>,
}

impl<S> SyncCache<S> {
    /// Wraps a stack in a mutex.
    pub fn new(inner: S) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Runs `f` with exclusive access to the wrapped stack.
    ///
    /// Escape hatch for decorator-specific calls (`set_capacity`,
    /// `set_pin_count`, `reclaimer`) that are not part of the [`Store`]
    /// surface.
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Consumes the wrapper and returns the stack.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }

    /// Returns the wrapped store's identifier as an owned string.
    pub fn id<K, V>(&self) -> String
    where
        S: Store<K, V>,
    {
        self.inner.lock().id().to_string()
    }

    /// Serialized [`Store::put`].
    pub fn put<K, V>(&self, key: K, value: V)
    where
        S: Store<K, V>,
    {
        self.inner.lock().put(key, value);
    }

    /// Serialized [`Store::get`].
    pub fn get<K, V>(&self, key: &K) -> Option<V>
    where
        S: Store<K, V>,
    {
        self.inner.lock().get(key)
    }

    /// Serialized [`Store::remove`].
    pub fn remove<K, V>(&self, key: &K) -> Option<V>
    where
        S: Store<K, V>,
    {
        self.inner.lock().remove(key)
    }

    /// Serialized [`Store::len`].
    pub fn len<K, V>(&self) -> usize
    where
        S: Store<K, V>,
    {
        self.inner.lock().len()
    }

    /// Serialized [`Store::is_empty`].
    pub fn is_empty<K, V>(&self) -> bool
    where
        S: Store<K, V>,
    {
        self.inner.lock().is_empty()
    }

    /// Serialized [`Store::clear`].
    pub fn clear<K, V>(&self)
    where
        S: Store<K, V>,
    {
        self.inner.lock().clear();
    }

    /// Serialized [`Store::metrics`].
    pub fn metrics<K, V>(&self) -> StoreMetrics
    where
        S: Store<K, V>,
    {
        self.inner.lock().metrics()
    }
}
