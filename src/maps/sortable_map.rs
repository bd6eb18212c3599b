use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::mem;

use super::{Iter, MapIterator};
use crate::arrays;
use crate::search;
use crate::sortable::{Comparator, Sortable};
use crate::sorts::{Quicksort, Sort};

/// A map of [`Sortable`] keys to values, iterated in ascending key order.
///
/// Keys live in a sorted [`Vec`] while values are indexed by the keys'
/// [`unique_key`](Sortable::unique_key). Every key in the Vec has exactly one entry in the index
/// and vice versa.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the SortableMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(1)`* for existing keys, `O(n)` for new keys |
/// | `get` | `O(1)`* |
/// | `delete` | `O(n)` |
/// | `contains` | `O(1)`* |
/// | `iterator_by` | `O(n log n)` |
///
/// \* Hashing the unique key is linear in its length.
#[derive(Debug, Clone)]
pub struct SortableMap<K: Sortable, V> {
    pub(crate) keys: Vec<K>,
    pub(crate) index: HashMap<String, V>,
}

impl<K: Sortable, V> SortableMap<K, V> {
    pub fn new() -> SortableMap<K, V> {
        SortableMap {
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_cap(cap: usize) -> SortableMap<K, V> {
        SortableMap {
            keys: Vec::with_capacity(cap),
            index: HashMap::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Associates `value` with `key`. If the key was already present its value is replaced in
    /// place and the previous value returned; the stored key isn't changed.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = key.unique_key();
        if let Some(existing) = self.index.get_mut(&hash) {
            return Some(mem::replace(existing, value));
        }

        let pos = search::binary_of(&self.keys, &key);
        self.keys.insert(pos, key);
        self.index.insert(hash, value);
        None
    }

    /// Returns a reference to the value associated with `key`, or None if there is none.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(&key.unique_key())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index.get_mut(&key.unique_key())
    }

    /// Returns the stored key equal to `key` along with its value.
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        let value = self.get(key)?;
        let pos = self.position(key)?;
        Some((&self.keys[pos], value))
    }

    /// Removes the entry for `key`, returning its value if there was one.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let pos = self.position(key)?;
        let removed = self.keys.remove(pos);
        self.index.remove(&removed.unique_key())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(&key.unique_key())
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.index.clear();
    }

    /// Returns the keys in ascending order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns the values in ascending order of their keys.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Returns an iterator over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            keys: self.keys.iter(),
            index: &self.index,
        }
    }

    /// Returns a restartable iterator over all entries in ascending key order.
    pub fn iterator(&self) -> MapIterator<'_, K, V> {
        MapIterator::new(self, self.keys.iter().collect())
    }

    /// Returns a restartable iterator visiting the entries in the order defined by `comparator`.
    /// Only the iterator's own key list is sorted, the map is left untouched.
    pub fn iterator_by<C: Comparator<K>>(&self, comparator: C) -> MapIterator<'_, K, V> {
        let mut keys: Vec<&K> = self.keys.iter().collect();
        Quicksort::new(|a: &&K, b: &&K| comparator.compare(*a, *b)).sort(&mut keys);
        MapIterator::new(self, keys)
    }

    /// Returns the position of `key` in [`keys`](SortableMap::keys), if present.
    pub(crate) fn position(&self, key: &K) -> Option<usize> {
        let hash = key.unique_key();
        if !self.index.contains_key(&hash) {
            return None;
        }

        let start = search::binary_of(&self.keys, key);
        self.keys[start..]
            .iter()
            .take_while(|other| !key.less(other))
            .position(|other| other.unique_key() == hash)
            .map(|offset| start + offset)
    }
}

impl<K: Sortable, V> Default for SortableMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Sortable, V> FromIterator<(K, V)> for SortableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SortableMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Sortable, V> Extend<(K, V)> for SortableMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K: Sortable, V> IntoIterator for &'a SortableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Sortable, V: PartialEq> PartialEq for SortableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        arrays::sorted_equals_by(&self.keys, &other.keys, |a, b| a.equal(b))
            && self.index == other.index
    }
}

/// One line per entry, `{position}: {key} => {value}`, in key order.
impl<K: Sortable + Display, V: Display> Display for SortableMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            writeln!(f, "{i}: {key} => {value}")?;
        }
        Ok(())
    }
}
