use std::{borrow::Borrow, fmt, hash::Hash};

use log::trace;

use crate::{
    error::LruError,
    ordered_map::{IntoIter, Iter, Keys, OrderedMap, Values},
};

/// Upper bound on slots reserved up front, big capacities grow on demand
const MAX_PREALLOCATED: usize = 1024;

/// Fixed-capacity cache that evicts the least recently used entry.
///
/// Recency is the order of the backing [`OrderedMap`]: front is the least
/// recently used entry, back the most recently used. Only [`OrderedLru::set`]
/// and a hit through [`OrderedLru::get`] promote a key. The backing map is
/// private, so nothing can grow the cache past its capacity.
///
/// Keys need `Clone` besides `Hash + Eq`: each new key is cloned exactly once
/// on insertion, one copy for the lookup index and one for its list node.
/// Hits, overwrites and evictions never clone. Wrap keys that are expensive
/// or impossible to clone in an `Rc`/`Arc`, or use [`crate::IdentityKey`].
#[derive(Clone)]
pub struct OrderedLru<K, V> {
    capacity: usize,
    entries: OrderedMap<K, V>,
}

impl<K: Hash + Eq + Clone, V> OrderedLru<K, V> {
    /// Create an empty cache holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: OrderedMap::with_capacity(capacity.min(MAX_PREALLOCATED)),
        }
    }

    /// Create an empty cache from a signed capacity, rejecting negative or oversized bounds
    pub fn try_new(capacity: i128) -> Result<Self, LruError> {
        let checked =
            usize::try_from(capacity).map_err(|_| LruError::InvalidCapacity(capacity))?;
        Ok(Self::new(checked))
    }

    /// Create a cache and `set` each pair in order, front to back.
    /// Pairs beyond the capacity evict the earliest ones.
    pub fn from_entries<I>(capacity: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut cache = Self::new(capacity);
        cache.extend(entries);
        cache
    }

    /// Fallible [`OrderedLru::from_entries`]
    pub fn try_from_entries<I>(capacity: i128, entries: I) -> Result<Self, LruError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut cache = Self::try_new(capacity)?;
        cache.extend(entries);
        Ok(cache)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a value without counting it as a use
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Look up a value, a hit makes `key` the most recently used entry
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.entries.move_to_back(key) {
            return None;
        }
        self.entries.back().map(|(_, value)| value)
    }

    /// Assign `value` to `key` and make it the most recently used entry.
    /// If that pushes the cache over capacity the least recently used entry is evicted.
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert_back(key, value);

        // A single set can only overshoot by one
        if self.entries.len() > self.capacity && self.entries.pop_front().is_some() {
            trace!(
                "Evicted least recently used entry ({} / {} entries)",
                self.entries.len(),
                self.capacity
            );
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Delete an entry, returning its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }
}

impl<K, V> OrderedLru<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate from least to most recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> Values<'_, K, V> {
        self.entries.values()
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for OrderedLru<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedLru<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("OrderedLru")
            .field("capacity", &self.capacity)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<K, V> IntoIterator for OrderedLru<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedLru<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
