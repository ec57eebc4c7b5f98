//! TTL-bounded in-memory cache for FPL API payloads.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use lru::LruCache;
use serde_json::Value;

/// Comfortably above the number of distinct FPL endpoints; LRU eviction
/// only kicks in when entry lookups fan out across many team ids.
const DEFAULT_CAPACITY: usize = 256;

struct CacheEntry {
    stored_at: Instant,
    data: Arc<Value>,
}

/// LRU cache whose entries expire after a fixed TTL.
///
/// Expired entries are not evicted on read; they stay in their slot until
/// the next successful fetch overwrites them. A failing upstream therefore
/// never empties the cache, it just stops the stale data being served.
pub struct TtlCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl TtlCache {
    /// Cache with the given freshness window and the default capacity.
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_CAPACITY)
    }

    /// Cache with an explicit capacity.
    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        TtlCache {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// The payload stored under `key`, if it is still fresh.
    pub fn get(&self, key: &str) -> Option<Arc<Value>> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(Arc::clone(&entry.data))
        } else {
            None
        }
    }

    /// Store `data` under `key`, superseding any previous entry, and
    /// return a shared handle to it.
    pub fn put(&self, key: &str, data: Value) -> Arc<Value> {
        let data = Arc::new(data);
        self.entries.lock().unwrap().put(
            key.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                data: Arc::clone(&data),
            },
        );
        data
    }

    /// Whether `key` holds an entry at all, fresh or stale.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains(key)
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_entry_is_served() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put("bootstrap-static/", json!({"events": []}));

        let hit = cache.get("bootstrap-static/").unwrap();
        assert_eq!(*hit, json!({"events": []}));
    }

    #[test]
    fn test_cold_cache_misses() {
        let cache = TtlCache::new(Duration::from_secs(60));
        assert!(cache.get("fixtures/").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_stale_entry_not_served_but_retained() {
        let cache = TtlCache::new(Duration::from_millis(5));
        cache.put("fixtures/", json!([1, 2, 3]));
        std::thread::sleep(Duration::from_millis(20));

        assert!(cache.get("fixtures/").is_none());
        assert!(cache.contains("fixtures/"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_supersedes_previous_entry() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put("entry/42/", json!({"points": 10}));
        cache.put("entry/42/", json!({"points": 20}));

        let hit = cache.get("entry/42/").unwrap();
        assert_eq!(hit["points"], 20);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let cache = TtlCache::with_capacity(Duration::from_secs(60), 2);
        cache.put("a", json!(1));
        cache.put("b", json!(2));
        cache.put("c", json!(3));

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }
}
