//! Lifetime-aware decorator: pinning and forced reclamation.
//!
//! Run with: `cargo run --example weak_reclaim`

use std::sync::Arc;

use cachewrap::prelude::*;

fn main() {
    let mut cache = WeakCache::with_pin_count(MemoryStore::new("blobs"), 1);
    let reclaimer = cache.reclaimer();

    cache.put("hot", Arc::new("read often".to_string()));
    cache.put("cold", Arc::new("read once".to_string()));

    // Reading "hot" last leaves it pinned; "cold" aged out of the ring.
    let _ = cache.get(&"cold");
    let _ = cache.get(&"hot");

    let reclaimed = reclaimer.collect();
    println!("reclaimed {reclaimed} value(s)");

    println!("hot  -> {:?}", cache.get(&"hot").as_deref());
    println!("cold -> {:?}", cache.get(&"cold").as_deref());
    println!("size -> {}", cache.len());
}
