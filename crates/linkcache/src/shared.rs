//! Lock-guarded shared handle over the single-threaded cache core

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::LruCache;
use crate::error::Result;
use crate::stats::CacheStats;

/// Cloneable, thread-safe handle to an [`LruCache`].
///
/// One exclusive lock guards the chain and the index jointly, so every
/// operation, eviction-then-insert included, is observed as a unit. The two
/// structures are updated together on every call; splitting the lock is not
/// sound because promotion rewires neighbour links a concurrent walker
/// could be following.
#[derive(Clone)]
pub struct SharedCache {
    cache: Arc<Mutex<LruCache>>,
    stats: Arc<CacheStats>,
}

impl SharedCache {
    /// Create a shared cache holding at most `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, at least 1
    ///
    /// # Returns
    /// * `Result<SharedCache>` - The handle, or `Error::InvalidCapacity`
    pub fn new(capacity: usize) -> Result<Self> {
        let cache = LruCache::new(capacity)?;
        let stats = cache.stats_handle();

        Ok(Self {
            cache: Arc::new(Mutex::new(cache)),
            stats,
        })
    }

    /// Insert or update `key`. See [`LruCache::put`].
    pub fn put(&self, key: impl Into<String>, value: i64) {
        self.cache.lock().put(key, value);
    }

    /// Look up `key`, promoting it on a hit. See [`LruCache::get`].
    pub fn get(&self, key: &str) -> Option<i64> {
        self.cache.lock().get(key)
    }

    /// Drop `key`, returning its value if it was present
    pub fn remove(&self, key: &str) -> Option<i64> {
        self.cache.lock().remove(key)
    }

    /// Number of entries currently cached
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Capacity fixed at construction
    pub fn capacity(&self) -> usize {
        self.cache.lock().capacity()
    }

    /// Drop every entry and reset statistics
    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    /// Usage counters, readable without taking the lock
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Ordinal chain position of `key`, 0 = most recently used. For tests
    /// and diagnostics.
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.cache.lock().position_of(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_round_trip() {
        let cache = SharedCache::new(4).unwrap();

        cache.put("rose", 10);
        assert_eq!(cache.get("rose"), Some(10));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().hits(), 1);
    }

    #[test]
    fn test_clone_shares_state() {
        let cache = SharedCache::new(4).unwrap();
        let other = cache.clone();

        cache.put("rose", 10);
        assert_eq!(other.get("rose"), Some(10));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_concurrent_puts_respect_capacity() {
        const CAPACITY: usize = 16;
        const THREADS: usize = 4;
        const PER_THREAD: usize = 200;

        let cache = SharedCache::new(CAPACITY).unwrap();

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        let key = format!("t{t}-{i:04}");
                        cache.put(key.clone(), (t * PER_THREAD + i) as i64);
                        cache.get(&key);
                        assert!(cache.len() <= CAPACITY);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), CAPACITY);
        let expected = (THREADS * PER_THREAD - CAPACITY) as u64;
        assert_eq!(cache.stats().evictions(), expected);
    }
}
