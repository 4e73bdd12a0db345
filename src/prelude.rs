pub use crate::decorator::fifo::{FifoCache, DEFAULT_CAPACITY};
pub use crate::decorator::weak::{WeakCache, DEFAULT_PIN_COUNT};
pub use crate::ds::{AdmissionMode, AdmissionQueue, PinRing};
pub use crate::error::ConfigError;
pub use crate::reclaim::{Reclaimer, WeakHold};
pub use crate::store::MemoryStore;
pub use crate::traits::{Store, StoreMetrics};

#[cfg(feature = "concurrency")]
pub use crate::decorator::sync::SyncCache;
