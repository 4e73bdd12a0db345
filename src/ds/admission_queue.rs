//! Insertion-ordered key admission queue for FIFO eviction.
//!
//! Tracks the order in which keys were admitted to a cache. Keys are
//! appended at the tail; eviction candidates are popped from the head.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        AdmissionQueue<K>                            │
//! │                                                                     │
//! │   entries: VecDeque<K>                                              │
//! │                                                                     │
//! │   ┌──────┬──────┬──────┬──────┐                                     │
//! │   │  A   │  B   │  C   │  D   │                                     │
//! │   └──────┴──────┴──────┴──────┘                                     │
//! │     ▲                     ▲                                         │
//! │   head                  tail                                        │
//! │   (oldest,              (newest,                                    │
//! │    pop_oldest)           admit)                                     │
//! │                                                                     │
//! │   AdmissionMode::Unique                                             │
//! │     admit(B)  → [A, C, D, B]   existing slot moves to the tail      │
//! │     forget(C) → [A, D, B]      removal prunes the slot              │
//! │                                                                     │
//! │   AdmissionMode::PerPut                                             │
//! │     admit(B)  → [A, B, C, D, B]  every admit appends a slot         │
//! │     forget(C) → [A, B, C, D, B]  removal leaves the slot behind     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation    | `Unique`           | `PerPut`            |
//! |--------------|--------------------|---------------------|
//! | `admit`      | O(n) move-to-tail  | O(1) append         |
//! | `pop_oldest` | O(1)               | O(1)                |
//! | `forget`     | O(n) prune         | O(1) no-op          |
//!
//! The O(n) scans in `Unique` mode are linear walks over at most
//! `capacity` keys, the same cost profile the crate accepts elsewhere for
//! bounded housekeeping.
//!
//! ## Mode Semantics
//!
//! `PerPut` reproduces a deployed behavior with two known consequences:
//! a key re-admitted while already queued occupies multiple slots (each
//! counted against the capacity bound), and forgetting a key leaves its
//! slot to be popped later, evicting nothing when it surfaces. `Unique`
//! is the corrected bookkeeping and the default. Callers pick per cache;
//! see [`FifoCache`](crate::decorator::fifo::FifoCache).

use std::collections::VecDeque;

/// How the queue accounts for re-admitted and removed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdmissionMode {
    /// One slot per key: re-admitting moves the slot to the tail, and
    /// `forget` prunes it. The default.
    #[default]
    Unique,
    /// One slot per admit call: duplicates accumulate and `forget` is a
    /// no-op. Matches legacy deployments bug-for-bug.
    PerPut,
}

/// Ordered sequence of admitted keys, oldest at the head.
///
/// # Example
///
/// ```
/// use cachewrap::ds::{AdmissionMode, AdmissionQueue};
///
/// let mut queue = AdmissionQueue::new(AdmissionMode::Unique);
/// queue.admit("a");
/// queue.admit("b");
/// queue.admit("a"); // moves to the tail
///
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.pop_oldest(), Some("b"));
/// ```
#[derive(Debug, Clone)]
pub struct AdmissionQueue<K> {
    entries: VecDeque<K>,
    mode: AdmissionMode,
}

impl<K> AdmissionQueue<K>
where
    K: Eq,
{
    /// Creates an empty queue with the given bookkeeping mode.
    pub fn new(mode: AdmissionMode) -> Self {
        Self {
            entries: VecDeque::new(),
            mode,
        }
    }

    /// Returns the bookkeeping mode.
    #[inline]
    pub fn mode(&self) -> AdmissionMode {
        self.mode
    }

    /// Records an admission at the tail.
    ///
    /// In [`AdmissionMode::Unique`], an existing slot for the key is
    /// dropped first, so the key's age resets to newest.
    pub fn admit(&mut self, key: K) {
        if self.mode == AdmissionMode::Unique {
            if let Some(pos) = self.entries.iter().position(|k| *k == key) {
                self.entries.remove(pos);
            }
        }
        self.entries.push_back(key);
    }

    /// Pops the oldest admitted key, if any.
    #[inline]
    pub fn pop_oldest(&mut self) -> Option<K> {
        self.entries.pop_front()
    }

    /// Drops the slot held by `key`, if the mode prunes at all.
    ///
    /// Returns `true` if a slot was dropped. [`AdmissionMode::PerPut`]
    /// never prunes.
    pub fn forget(&mut self, key: &K) -> bool {
        if self.mode == AdmissionMode::PerPut {
            return false;
        }
        match self.entries.iter().position(|k| k == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the key currently holds at least one slot.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.iter().any(|k| k == key)
    }

    /// Returns the number of occupied slots (not distinct keys).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all slots.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Validates internal invariants. Only runs in debug builds.
    #[cfg(debug_assertions)]
    pub(crate) fn validate_invariants(&self) {
        if self.mode == AdmissionMode::Unique {
            let mut seen = Vec::with_capacity(self.entries.len());
            for key in &self.entries {
                debug_assert!(
                    !seen.contains(&key),
                    "duplicate slot in Unique admission queue"
                );
                seen.push(key);
            }
        }
    }
}
