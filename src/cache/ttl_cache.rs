//! TTL Cache Handle
//!
//! Owns a [`CacheStore`] behind a mutex together with the sweeper task that
//! expires its entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, MAX_SWEEP_INTERVAL, MIN_SWEEP_INTERVAL};
use crate::tasks::spawn_sweeper_task;

// == Cache ==
/// Thread-safe, self-cleaning key/value store for byte payloads.
///
/// `add`, `get` and each sweep pass are serialized by one mutex over the whole
/// store. Entries are removed only by the sweeper or by being overwritten;
/// lookups never check age. An entry can therefore be observed for up to
/// `ttl + sweep_interval` after it was written (see [`Cache::staleness_bound`]),
/// plus however long the sweeper waits for the lock on that tick.
///
/// Dropping the cache, or calling [`Cache::shutdown`], stops the sweeper.
/// Share a cache between tasks by wrapping it in an `Arc`.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    sweeper: JoinHandle<()>,
    ttl: Duration,
    sweep_interval: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache whose sweeper runs every `ttl` and removes
    /// entries older than `ttl`.
    ///
    /// Must be called from within a tokio runtime. Returns without waiting
    /// for the sweeper to start.
    pub fn new(ttl: Duration) -> Self {
        Self::with_sweep_interval(ttl, ttl)
    }

    /// Creates an empty cache with a sweep period decoupled from the ttl.
    ///
    /// The sweep interval is clamped to
    /// [`MIN_SWEEP_INTERVAL`]..=[`MAX_SWEEP_INTERVAL`]; any ttl is accepted.
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Self {
        let sweep_interval = sweep_interval.clamp(MIN_SWEEP_INTERVAL, MAX_SWEEP_INTERVAL);
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let sweeper = spawn_sweeper_task(store.clone(), sweep_interval);

        Self {
            store,
            sweeper,
            ttl,
            sweep_interval,
        }
    }

    // == Add ==
    /// Inserts or replaces the payload for `key`. Cannot fail.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.store.lock().await.add(key.into(), value.into());
    }

    // == Get ==
    /// Returns the payload for `key`, or `None` on a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the hit, miss and expiry counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == TTL ==
    /// Returns the age after which entries are removed.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Sweep Interval ==
    /// Returns the period between sweep passes, after clamping.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    // == Staleness Bound ==
    /// Longest time an entry can remain visible after being written.
    ///
    /// Saturates at `Duration::MAX` for ttls near that limit.
    pub fn staleness_bound(&self) -> Duration {
        self.ttl.saturating_add(self.sweep_interval)
    }

    // == Shutdown ==
    /// Stops the sweeper. The cache stays usable, but entries no longer expire.
    pub fn shutdown(&self) {
        if !self.sweeper.is_finished() {
            debug!("Stopping cache sweeper");
        }
        self.sweeper.abort();
    }

    // == Is Sweeping ==
    /// Returns true while the sweeper task is alive.
    pub fn is_sweeping(&self) -> bool {
        !self.sweeper.is_finished()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}
