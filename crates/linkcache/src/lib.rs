//! # linkcache
//!
//! Fixed-capacity LRU cache over the linkchain recency chain.
//!
//! ## Architecture
//! - **Index**: AHash keyed map for O(1) entry lookup
//! - **Chain**: doubly-linked recency order, head = most recent, evictions
//!   come off the tail
//! - **Stats**: hit/miss/insert/update/eviction counters
//! - **Shared**: optional single-lock handle for use across threads
//!
//! Both `get` and `put` run in O(1): the index jumps straight to an
//! entry's chain node and the chain splices it to the head without a scan.

#![warn(missing_docs)]

mod cache;
mod error;
mod shared;
mod stats;

pub use cache::LruCache;
pub use error::{Error, Result};
pub use shared::SharedCache;
pub use stats::CacheStats;
