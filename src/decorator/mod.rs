pub mod fifo;
#[cfg(feature = "concurrency")]
pub mod sync;
pub mod weak;

pub use fifo::FifoCache;
#[cfg(feature = "concurrency")]
pub use sync::SyncCache;
pub use weak::WeakCache;
