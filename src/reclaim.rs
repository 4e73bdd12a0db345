//! Deterministic reclamation of weakly-held cache values.
//!
//! A garbage-collected runtime reclaims weakly-referenced values at some
//! arbitrary later point and reports them through a notification queue.
//! This module models that facility explicitly so the lifetime-aware
//! decorator behaves deterministically: values stay alive until a sweep
//! runs, a sweep only releases values with no strong owner elsewhere, and
//! the keys of released values surface on a pollable channel.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                         Reclaimer<K, T>                            │
//! │                                                                    │
//! │   custody: Vec<Custody<K, T>>        reclaimed: VecDeque<K>        │
//! │     key + Arc<T> (strong)              notification queue          │
//! │                                                                    │
//! │   register(k, &arc) ──► custody slot + WeakHold handed back        │
//! │                                                                    │
//! │   collect():                                                       │
//! │     for each custody slot:                                         │
//! │       strong_count == 1 (only custody) ──► drop Arc, queue key     │
//! │       strong_count >  1 (pinned/caller) ──► keep                   │
//! │                                                                    │
//! │   poll_reclaimed() ──► Some(key) | None                            │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A pinned value (strong clone in a
//! [`PinRing`](crate::ds::PinRing)) or a caller-held clone keeps the
//! value out of a sweep, exactly like reachability keeps an object out of
//! a garbage-collection cycle. [`Reclaimer::collect`] is the synchronous
//! "force reclamation" hook: no sweep, no notification, however long ago
//! the last strong owner vanished.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use cachewrap::reclaim::Reclaimer;
//!
//! let reclaimer: Reclaimer<&str, String> = Reclaimer::new();
//! let value = Arc::new("payload".to_string());
//! let hold = reclaimer.register("key", &value);
//!
//! // Still strongly owned by the caller: the sweep keeps it.
//! assert_eq!(reclaimer.collect(), 0);
//! assert!(hold.upgrade().is_some());
//!
//! drop(value);
//! assert_eq!(reclaimer.collect(), 1);
//! assert!(hold.upgrade().is_none());
//! assert_eq!(reclaimer.poll_reclaimed(), Some("key"));
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Weak hold on a registered value.
///
/// Does not by itself keep the value reachable. `upgrade` succeeds only
/// while at least one strong owner remains (custody, pin ring, caller).
#[derive(Debug)]
pub struct WeakHold<T> {
    weak: Weak<T>,
}

impl<T> WeakHold<T> {
    /// Attempts to resolve the hold to a strong handle.
    ///
    /// Returns `None` once the value has been reclaimed.
    #[inline]
    pub fn upgrade(&self) -> Option<Arc<T>> {
        self.weak.upgrade()
    }
}

// Derived Clone would demand T: Clone; the weak pointer clones regardless.
impl<T> Clone for WeakHold<T> {
    fn clone(&self) -> Self {
        Self {
            weak: Weak::clone(&self.weak),
        }
    }
}

/// A value in custody: the reclaimer's own strong handle plus the cache
/// key to surface when the value is released.
#[derive(Debug)]
struct Custody<K, T> {
    key: K,
    value: Arc<T>,
}

#[derive(Debug)]
struct ReclaimerInner<K, T> {
    custody: Vec<Custody<K, T>>,
    reclaimed: VecDeque<K>,
}

/// Stand-in for the runtime memory manager.
///
/// Owns a strong handle to every registered value until a
/// [`collect`](Reclaimer::collect) sweep finds the value unreachable from
/// anywhere else. Interior mutability lets a decorator share its
/// reclaimer handle (`Arc<Reclaimer>`) with tests and embedders that
/// drive sweeps.
#[derive(Debug)]
pub struct Reclaimer<K, T> {
    inner: Mutex<ReclaimerInner<K, T>>,
}

impl<K, T> Reclaimer<K, T>
where
    K: Clone,
{
    /// Creates a reclaimer with empty custody and notification queue.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ReclaimerInner {
                custody: Vec::new(),
                reclaimed: VecDeque::new(),
            }),
        }
    }

    /// Takes a value into custody and returns the weak hold for it.
    ///
    /// The reclaimer keeps its own strong clone, so the value survives
    /// even if the caller drops every other handle; only a sweep releases
    /// it. Re-registering a key creates a second custody slot; the stale
    /// one is released by a later sweep.
    pub fn register(&self, key: K, value: &Arc<T>) -> WeakHold<T> {
        let weak = Arc::downgrade(value);
        self.inner.lock().custody.push(Custody {
            key,
            value: Arc::clone(value),
        });
        WeakHold { weak }
    }

    /// Synchronous sweep: releases every custody value with no strong
    /// owner elsewhere and queues its key for notification.
    ///
    /// Returns the number of values released.
    pub fn collect(&self) -> usize {
        let mut inner = self.inner.lock();
        let ReclaimerInner { custody, reclaimed } = &mut *inner;
        let before = custody.len();
        custody.retain(|slot| {
            if Arc::strong_count(&slot.value) == 1 {
                reclaimed.push_back(slot.key.clone());
                false
            } else {
                true
            }
        });
        before - custody.len()
    }

    /// Polls the notification queue for the next reclaimed key.
    pub fn poll_reclaimed(&self) -> Option<K> {
        self.inner.lock().reclaimed.pop_front()
    }

    /// Returns the number of values currently in custody.
    pub fn in_custody(&self) -> usize {
        self.inner.lock().custody.len()
    }

    /// Returns the number of notifications waiting to be drained.
    pub fn pending_notifications(&self) -> usize {
        self.inner.lock().reclaimed.len()
    }
}

impl<K, T> Default for Reclaimer<K, T>
where
    K: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
