//! Cache Store Module
//!
//! HashMap storage with uniform, age-based expiration. The store itself is not
//! synchronized; [`Cache`](crate::cache::Cache) wraps it in a mutex shared with
//! the sweeper task.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to payload storage with a single expiry policy.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and removal counters
    stats: CacheStats,
    /// Age after which an entry is eligible for removal
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or replaces the payload for `key`, stamping it with the current time.
    ///
    /// Any key and any payload are accepted, including empty ones.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Age is never checked here: a present entry is returned even if it is
    /// past its ttl and the sweeper has not reached it yet.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Cleanup Expired ==
    /// Removes every entry older than the ttl at `now`.
    ///
    /// Returns the removed keys, in no particular order.
    pub fn cleanup_expired(&mut self, now: Instant) -> Vec<String> {
        let ttl = self.ttl;
        let mut removed = Vec::new();

        self.entries.retain(|key, entry| {
            let expired = entry.is_expired_at(ttl, now);
            if expired {
                removed.push(key.clone());
            }
            !expired
        });

        self.stats.record_sweep(removed.len());
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == TTL ==
    /// Returns the age after which entries are removed.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(5);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new(TTL);

        store.add("key1".to_string(), b"value1".to_vec());
        let value = store.get("key1");

        assert_eq!(value, Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new(TTL);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(TTL);

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_empty_key_and_value() {
        let mut store = CacheStore::new(TTL);

        store.add(String::new(), Vec::new());

        assert_eq!(store.get(""), Some(Vec::new()));
    }

    #[test]
    fn test_store_get_does_not_evict_stale_entry() {
        let mut store = CacheStore::new(Duration::from_millis(10));

        store.add("stale".to_string(), vec![1]);
        std::thread::sleep(Duration::from_millis(30));

        // Only the sweep pass removes entries
        assert_eq!(store.get("stale"), Some(vec![1]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new(Duration::from_secs(1));

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key2".to_string(), b"value2".to_vec());

        let now = Instant::now();
        assert!(store.cleanup_expired(now).is_empty());

        let removed = store.cleanup_expired(now + Duration::from_secs(2));
        assert_eq!(removed.len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_cleanup_keeps_overwritten_entry() {
        let mut store = CacheStore::new(Duration::from_millis(50));

        store.add("old".to_string(), vec![1]);
        std::thread::sleep(Duration::from_millis(80));
        store.add("fresh".to_string(), vec![2]);

        let removed = store.cleanup_expired(Instant::now());

        assert_eq!(removed, vec!["old".to_string()]);
        assert_eq!(store.get("fresh"), Some(vec![2]));
        assert_eq!(store.get("old"), None);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(Duration::from_secs(1));

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key2".to_string(), b"value2".to_vec());
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.cleanup_expired(Instant::now() + Duration::from_secs(2));

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.expired, 2);
        assert_eq!(stats.sweeps, 1);
        assert_eq!(stats.total_entries, 0);
    }
}
