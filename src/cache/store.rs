//! Response Cache Module
//!
//! Keyed store of decoded upstream responses with reader-chosen TTLs.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{duration_ms, CacheEntry, CacheStats, Clock, MonotonicClock};

// == Response Cache ==
/// In-memory response cache.
///
/// Entries are only removed when a read finds them stale, on `clear()`, or
/// by an explicit sweep. Nothing bounds the number of entries.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Time source for stamping and aging
    clock: Arc<dyn Clock>,
    /// Performance statistics
    stats: CacheStats,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache on the process monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(MonotonicClock::new()))
    }

    /// Creates an empty cache on the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns the value stored under `key` if it is no older than `ttl`.
    ///
    /// A stale entry is removed. A key that was never stored is left alone.
    pub fn get(&mut self, key: &str, ttl: Duration) -> Option<Value> {
        let now = self.clock.now_ms();
        let ttl_ms = duration_ms(ttl);

        let fresh = match self.entries.get(key) {
            Some(entry) => entry.is_fresh(now, ttl_ms),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if !fresh {
            self.entries.remove(key);
            self.stats.record_stale_eviction();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its age.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let entry = CacheEntry::new(value, self.clock.now_ms());
        self.entries.insert(key.into(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.record_clear();
        self.stats.set_total_entries(0);
    }

    // == Sweep ==
    /// Removes every entry older than `max_age`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_older_than(&mut self, max_age: Duration) -> usize {
        let now = self.clock.now_ms();
        let max_age_ms = duration_ms(max_age);

        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh(now, max_age_ms));
        let removed = before - self.entries.len();

        self.stats.record_swept(removed);
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

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use serde_json::json;

    const TTL: Duration = Duration::from_millis(30_000);

    fn manual_cache() -> (ResponseCache, ManualClock) {
        let clock = ManualClock::new(1_000_000);
        (ResponseCache::with_clock(Arc::new(clock.clone())), clock)
    }

    #[test]
    fn test_cache_new() {
        let cache = ResponseCache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_set_and_get() {
        let (mut cache, _clock) = manual_cache();

        cache.set("/api/price?symbol=BTC", json!({"price": 64000.5}));
        let value = cache.get("/api/price?symbol=BTC", TTL).unwrap();

        assert_eq!(value["price"], 64000.5);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_never_stored() {
        let (mut cache, _clock) = manual_cache();

        assert!(cache.get("nonexistent", TTL).is_none());
        assert!(cache.is_empty());
        assert_eq!(cache.stats().stale_evictions, 0);
    }

    #[test]
    fn test_cache_ttl_boundary() {
        let (mut cache, clock) = manual_cache();
        cache.set("k", json!(1));

        clock.advance(TTL - Duration::from_millis(1));
        assert_eq!(cache.get("k", TTL), Some(json!(1)));

        clock.advance(Duration::from_millis(2));
        assert!(cache.get("k", TTL).is_none());
        assert!(!cache.contains_key("k"), "stale entry is evicted on read");
    }

    #[test]
    fn test_cache_ttl_chosen_per_read() {
        let (mut cache, clock) = manual_cache();
        cache.set("k", json!("v"));

        clock.advance(Duration::from_secs(20));

        // A lenient reader still sees the value
        assert!(cache.get("k", Duration::from_secs(60)).is_some());
        // A strict reader evicts it
        assert!(cache.get("k", Duration::from_secs(10)).is_none());
        // And now it is gone for everyone
        assert!(cache.get("k", Duration::from_secs(60)).is_none());
    }

    #[test]
    fn test_cache_huge_ttl_does_not_wrap() {
        let (mut cache, clock) = manual_cache();
        cache.set("k", json!(1));
        clock.advance(Duration::from_secs(3_600));

        // 18_446_744_073_709_552 s overflows u64 milliseconds
        let huge = Duration::from_secs(18_446_744_073_709_552);
        assert_eq!(cache.get("k", huge), Some(json!(1)));
        assert_eq!(cache.sweep_older_than(Duration::MAX), 0);
        assert!(cache.contains_key("k"));
    }

    #[test]
    fn test_cache_overwrite_resets_age() {
        let (mut cache, clock) = manual_cache();

        cache.set("k", json!("old"));
        clock.advance(Duration::from_secs(25));
        cache.set("k", json!("new"));
        clock.advance(Duration::from_secs(25));

        assert_eq!(cache.get("k", TTL), Some(json!("new")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_clear() {
        let (mut cache, _clock) = manual_cache();

        cache.set("a", json!(1));
        cache.set("b", json!(2));
        cache.clear();

        assert!(cache.get("a", TTL).is_none());
        assert!(cache.get("b", TTL).is_none());
        assert_eq!(cache.stats().clears, 1);
    }

    #[test]
    fn test_cache_set_after_clear_repopulates() {
        let (mut cache, _clock) = manual_cache();

        cache.set("a", json!(1));
        cache.clear();
        cache.set("a", json!(2));

        assert_eq!(cache.get("a", TTL), Some(json!(2)));
    }

    #[test]
    fn test_cache_stats() {
        let (mut cache, clock) = manual_cache();

        cache.set("k", json!(1));
        cache.get("k", TTL); // hit
        cache.get("missing", TTL); // miss
        clock.advance(TTL * 2);
        cache.get("k", TTL); // stale miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.stale_evictions, 1);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_cache_sweep_older_than() {
        let (mut cache, clock) = manual_cache();

        cache.set("old", json!(1));
        clock.advance(Duration::from_secs(120));
        cache.set("young", json!(2));
        clock.advance(Duration::from_secs(30));

        let removed = cache.sweep_older_than(Duration::from_secs(60));
        assert_eq!(removed, 1);
        assert!(!cache.contains_key("old"));
        assert!(cache.contains_key("young"));
        assert_eq!(cache.stats().swept, 1);
    }
}
