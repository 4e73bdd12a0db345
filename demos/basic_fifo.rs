//! Bounded-FIFO decorator over a memory store.
//!
//! Run with: `cargo run --example basic_fifo`

use cachewrap::prelude::*;

fn main() {
    let mut cache = FifoCache::try_with_capacity(MemoryStore::new("pages"), 2).unwrap();

    cache.put("A", 1);
    cache.put("B", 2);
    cache.put("C", 3); // overflows: "A" is evicted

    println!("A -> {:?}", cache.get(&"A"));
    println!("B -> {:?}", cache.get(&"B"));
    println!("C -> {:?}", cache.get(&"C"));
    println!("evictions: {}", cache.metrics().evictions);
}
