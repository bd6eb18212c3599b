use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;

use super::SortableMap;
use crate::sortable::Sortable;

/// A borrowed iterator over the entries of a [`SortableMap`] in ascending key order.
pub struct Iter<'a, K: Sortable, V> {
    pub(crate) keys: slice::Iter<'a, K>,
    pub(crate) index: &'a HashMap<String, V>,
}

impl<'a, K: Sortable, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        // The index holds an entry for every key.
        Some((key, &self.index[&key.unique_key()]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Sortable, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        Some((key, &self.index[&key.unique_key()]))
    }
}

impl<K: Sortable, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Sortable, V> FusedIterator for Iter<'_, K, V> {}

/// A restartable iterator over a snapshot of a [`SortableMap`]'s keys.
///
/// The key order is fixed when the iterator is created (see
/// [`SortableMap::iterator_by`]), and [`rewind`](MapIterator::rewind) starts it over.
pub struct MapIterator<'a, K: Sortable, V> {
    map: &'a SortableMap<K, V>,
    keys: Vec<&'a K>,
    current: usize,
}

impl<'a, K: Sortable, V> MapIterator<'a, K, V> {
    pub(crate) const fn new(map: &'a SortableMap<K, V>, keys: Vec<&'a K>) -> MapIterator<'a, K, V> {
        MapIterator {
            map,
            keys,
            current: 0,
        }
    }

    /// Moves the iterator back to the first entry.
    pub const fn rewind(&mut self) {
        self.current = 0;
    }

    /// The keys in the order this iterator visits them.
    pub fn keys(&self) -> &[&'a K] {
        &self.keys
    }
}

impl<'a, K: Sortable, V> Iterator for MapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = *self.keys.get(self.current)?;
        self.current += 1;
        Some((key, &self.map.index[&key.unique_key()]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<K: Sortable, V> ExactSizeIterator for MapIterator<'_, K, V> {}

impl<K: Sortable, V> FusedIterator for MapIterator<'_, K, V> {}
