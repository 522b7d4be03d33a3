//! Cache Entry Module
//!
//! Defines a single stored payload and the instant it was written.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload and its insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, never inspected by the cache
    pub value: Vec<u8>,
    /// Insertion instant, used only to compute age
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted, measured at `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` at `now`.
    ///
    /// An entry whose age equals `ttl` exactly is still live; it becomes
    /// eligible for removal once its age exceeds `ttl`.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) > ttl
    }
}
