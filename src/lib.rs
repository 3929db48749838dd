//! Fixed-capacity, in-memory least-recently-used cache.
//!
//! ```
//! use ordered_lru::OrderedLru;
//!
//! let mut cache = OrderedLru::new(2);
//! cache.set("a", 1);
//! cache.set("b", 2);
//! assert_eq!(cache.get("a"), Some(&1)); // "b" is now least recently used
//!
//! cache.set("c", 3);
//! assert!(!cache.contains_key("b"));
//! ```

/// Insertion-ordered hash map backing the cache
pub mod ordered_map;

/// Capacity-bounded LRU policy
pub mod lru;

/// Keys compared by identity
pub mod identity;

/// Cache configuration loading
pub mod config;

pub mod error;

#[cfg(test)]
mod tests;

pub use config::LruConfig;
pub use error::LruError;
pub use identity::IdentityKey;
pub use lru::OrderedLru;
pub use ordered_map::OrderedMap;
