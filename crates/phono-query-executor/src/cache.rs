//! Query-result caching.
//!
//! Provides an LRU cache with TTL expiration for caching query results.
//! Thread-safe using `Mutex` for LRU operations. The dataset itself is
//! never cached here; it is loaded once and shared read-only.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;
use phono_query::{LanguageId, Query};

use crate::config::CacheConfig;

/// Returns the cache key for a query.
///
/// The `Display` rendering of a [`Query`] is canonical (feature names are
/// emitted in sorted order), so two queries built from the same tags in
/// different orders share one cache entry.
pub fn cache_key(query: &Query) -> String {
    query.to_string()
}

/// A cached result set with expiration tracking.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached language identifiers.
    result: HashSet<LanguageId>,
    /// When this entry was created.
    created_at: Instant,
}

impl CacheEntry {
    fn new(result: HashSet<LanguageId>) -> Self {
        Self {
            result,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Thread-safe LRU cache with TTL expiration for query results.
///
/// When the cache is full the least recently used entry is evicted;
/// entries also expire after the configured time-to-live.
pub struct QueryCache {
    /// The LRU cache wrapped in a mutex for thread-safety.
    inner: Mutex<LruCache<String, CacheEntry>>,
    /// Time-to-live for cache entries.
    ttl: Duration,
}

impl QueryCache {
    /// Creates a new query cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries.max(1)).unwrap();
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
        }
    }

    /// Creates a cache with custom capacity and TTL.
    pub fn with_capacity(max_entries: usize, ttl: Duration) -> Self {
        Self::new(CacheConfig { max_entries, ttl })
    }

    /// Gets a cached result set by key.
    ///
    /// Returns `None` if the key is absent or the entry has expired.
    /// Expired entries are removed on access; hits are promoted to
    /// most-recently-used.
    pub fn get(&self, key: &str) -> Option<HashSet<LanguageId>> {
        let mut inner = self.inner.lock().ok()?;

        if let Some(entry) = inner.get(key) {
            if entry.is_expired(self.ttl) {
                inner.pop(key);
                return None;
            }
            return Some(entry.result.clone());
        }

        None
    }

    /// Stores a result set under the given key.
    ///
    /// If the cache is full, the least recently used entry is evicted.
    pub fn set(&self, key: String, result: HashSet<LanguageId>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.put(key, CacheEntry::new(result));
        }
    }

    /// Returns the number of cached entries, expired or not.
    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(inner) => inner.len(),
            _ => 0,
        }
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all cached entries.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;

    use phono_query::{ComparisonOp, FeatureQuery};

    use super::*;

    fn ids(values: &[LanguageId]) -> HashSet<LanguageId> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_cache_set_and_get() {
        let cache = QueryCache::new(CacheConfig::default());
        cache.set("has(p) = 0".to_string(), ids(&[1, 2]));

        assert_eq!(cache.get("has(p) = 0"), Some(ids(&[1, 2])));
        assert_eq!(cache.get("has(p) = 1"), None);
    }

    #[test]
    fn test_cache_lru_eviction() {
        let cache = QueryCache::with_capacity(2, Duration::from_secs(60));
        cache.set("a".to_string(), ids(&[1]));
        cache.set("b".to_string(), ids(&[2]));
        cache.set("c".to_string(), ids(&[3]));

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(ids(&[2])));
        assert_eq!(cache.get("c"), Some(ids(&[3])));
    }

    #[test]
    fn test_cache_ttl_expiry() {
        let cache = QueryCache::with_capacity(16, Duration::from_millis(10));
        cache.set("a".to_string(), ids(&[1]));
        sleep(Duration::from_millis(25));

        assert_eq!(cache.get("a"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear() {
        let cache = QueryCache::new(CacheConfig::default());
        cache.set("a".to_string(), ids(&[1]));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_key_is_order_independent() {
        let a = Query::count(
            FeatureQuery::from_tags(&["+voice", "-nasal"]),
            ComparisonOp::Greater,
            2,
        );
        let b = Query::count(
            FeatureQuery::from_tags(&["-nasal", "+voice"]),
            ComparisonOp::Greater,
            2,
        );
        assert_eq!(cache_key(&a), cache_key(&b));
    }
}
