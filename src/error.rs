//! Error types for the cachewrap library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when decorator configuration parameters are
//!   invalid (e.g. zero admission capacity).
//!
//! Cache misses and reclaimed values are never errors; they surface as
//! `None` from [`Store::get`](crate::traits::Store::get) and friends.
//!
//! ## Example Usage
//!
//! ```
//! use cachewrap::decorator::fifo::FifoCache;
//! use cachewrap::error::ConfigError;
//! use cachewrap::store::MemoryStore;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<FifoCache<u64, u64, _>, ConfigError> =
//!     FifoCache::try_with_capacity(MemoryStore::new("bounded"), 128);
//! assert!(cache.is_ok());
//!
//! // Invalid capacity is caught without panicking
//! let bad = FifoCache::<u64, u64, _>::try_with_capacity(MemoryStore::new("bounded"), 0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when decorator configuration parameters are invalid.
///
/// Produced by fallible constructors and setters such as
/// [`FifoCache::try_with_capacity`](crate::decorator::fifo::FifoCache::try_with_capacity)
/// and [`FifoCache::set_capacity`](crate::decorator::fifo::FifoCache::set_capacity).
/// Carries a human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use cachewrap::decorator::fifo::FifoCache;
/// use cachewrap::store::MemoryStore;
///
/// let err = FifoCache::<u64, u64, _>::try_with_capacity(MemoryStore::new("s"), 0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
