pub mod admission_queue;
pub mod pin_ring;

pub use admission_queue::{AdmissionMode, AdmissionQueue};
pub use pin_ring::PinRing;
