//! Cache Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::cache::CacheStore;

/// Spawns a background task that sweeps expired entries out of `store`.
///
/// The task ticks every `interval`, takes the store lock for one full scan,
/// and repeats until aborted. Ticks are scheduled on a fixed period, so lock
/// waits and scan time do not push later sweeps back; a pass that overruns
/// its period delays the next tick instead of bursting.
///
/// It never stops on its own; the owning [`Cache`](crate::cache::Cache)
/// aborts it through the returned handle.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(5))));
/// let sweeper = spawn_sweeper_task(store.clone(), Duration::from_secs(5));
/// // Later:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper_task(store: Arc<Mutex<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(?interval, "Starting cache sweeper");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let (removed, remaining) = {
                let mut guard = store.lock().await;
                let removed = guard.cleanup_expired(Instant::now());
                (removed, guard.len())
            };

            for key in &removed {
                debug!(key = %key, "Evicted expired cache entry");
            }
            debug!(
                removed = removed.len(),
                remaining, "Cache sweep complete"
            );
        }
    })
}
