//! Cache Module
//!
//! In-memory byte payload cache with age-based expiration and a background
//! sweeper.

mod entry;
mod stats;
mod store;
mod ttl_cache;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use ttl_cache::Cache;

use std::time::Duration;

// == Public Constants ==
/// Shortest sweep period a cache will run with
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Longest sweep period a cache will run with (365 days)
pub const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
