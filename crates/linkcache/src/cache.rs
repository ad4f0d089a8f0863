//! LRU cache core: capacity enforcement over a chain and a key index

use std::collections::HashMap;
use std::sync::Arc;

use ahash::RandomState;
use linkchain::{Chain, Entry, SlotId};

use crate::error::{Error, Result};
use crate::stats::CacheStats;

/// Fixed-capacity least-recently-used cache.
///
/// Two views over one entry set: a doubly-linked [`Chain`] ordered from most
/// to least recently used, and a key index giving O(1) access to any entry's
/// chain node. Every operation updates both together, so after any call
/// `index.len() == chain.len() <= capacity` and each indexed key resolves to
/// a live chain node carrying that key.
pub struct LruCache {
    /// Maximum number of entries, fixed at construction
    capacity: usize,

    /// Recency order; head is the most recently used entry
    chain: Chain,

    /// key -> chain node handle
    index: HashMap<String, SlotId, RandomState>,

    /// Usage counters, shared with any [`SharedCache`](crate::SharedCache)
    /// handle built from this cache
    stats: Arc<CacheStats>,
}

impl LruCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, at least 1
    ///
    /// # Returns
    /// * `Result<LruCache>` - The empty cache, or `Error::InvalidCapacity`
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            capacity,
            chain: Chain::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            stats: Arc::new(CacheStats::new()),
        })
    }

    /// Insert or update `key`, making it the most recently used entry.
    ///
    /// A present key has its value overwritten in place and its node
    /// promoted; that path never evicts and never changes the size. A new
    /// key at full capacity first evicts the least recently used entry,
    /// dropping it from both the chain and the index.
    ///
    /// # Arguments
    /// * `key` - Lookup key
    /// * `value` - Payload to store
    pub fn put(&mut self, key: impl Into<String>, value: i64) {
        let key = key.into();

        if let Some(&slot) = self.index.get(&key) {
            self.chain.set_value(slot, value);
            self.chain.promote(slot);
            self.stats.record_update();
            return;
        }

        if self.index.len() == self.capacity {
            self.evict();
        }

        let slot = self.chain.push_head(Entry::new(key.clone(), value));
        self.index.insert(key, slot);
        self.stats.record_insert();
    }

    /// Look up `key`, promoting its entry to most recently used on a hit.
    ///
    /// # Arguments
    /// * `key` - Lookup key
    ///
    /// # Returns
    /// * `Option<i64>` - The stored value, or `None` when absent. Absence
    ///   is never signalled through a reserved value; any `i64`, negative
    ///   included, is a legitimate payload.
    pub fn get(&mut self, key: &str) -> Option<i64> {
        match self.index.get(key) {
            Some(&slot) => {
                self.chain.promote(slot);
                self.stats.record_hit();
                self.chain.entry(slot).map(|entry| entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Drop `key` from the cache, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        let slot = self.index.remove(key)?;
        self.chain.remove(slot).map(|entry| entry.value)
    }

    /// Number of entries currently cached
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Capacity fixed at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry and reset statistics
    pub fn clear(&mut self) {
        self.chain.clear();
        self.index.clear();
        self.stats.reset();
    }

    /// Usage counters
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub(crate) fn stats_handle(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    /// Ordinal chain position of `key`, 0 = most recently used.
    ///
    /// Walks the chain linearly; meant for tests and diagnostics, not
    /// production lookups.
    pub fn position_of(&self, key: &str) -> Option<usize> {
        let &slot = self.index.get(key)?;
        self.chain.position_of(slot)
    }

    /// Remove the tail entry and its index key to make room.
    fn evict(&mut self) {
        if let Some(entry) = self.chain.pop_tail() {
            let removed = self.index.remove(&entry.key);
            debug_assert!(removed.is_some(), "evicted key missing from index");
            self.stats.record_eviction();
        }
    }
}
