use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::slice;
use std::vec;

use super::Set;
use crate::arrays;
use crate::search;
use crate::sortable::Sortable;
use crate::sorts;
use crate::util::fmt::join_display;

/// A set of [`Sortable`] items kept in ascending order and deduplicated by their
/// [`unique_key`](Sortable::unique_key).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SortableSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `has` | `O(1)`* |
/// | `add` | `O(log n)` search, `O(n)` shift |
/// | `remove` | `O(log n)` search, `O(n)` shift |
/// | `get` | `O(1)` |
/// | `from_iter` | `O(n log n)` |
///
/// \* Hashing the unique key is linear in its length.
#[derive(Debug, Clone)]
pub struct SortableSet<T: Sortable> {
    pub(crate) items: Vec<T>,
    pub(crate) index: HashSet<String>,
}

impl<T: Sortable> SortableSet<T> {
    pub fn new() -> SortableSet<T> {
        SortableSet {
            items: Vec::new(),
            index: HashSet::new(),
        }
    }

    pub fn with_cap(cap: usize) -> SortableSet<T> {
        SortableSet {
            items: Vec::with_capacity(cap),
            index: HashSet::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the set contains an item with the same unique key as `item`.
    pub fn has(&self, item: &T) -> bool {
        self.index.contains(&item.unique_key())
    }

    /// Inserts `item` at its sorted position. Returns false and leaves the set untouched if an
    /// item with the same unique key is already present.
    pub fn add(&mut self, item: T) -> bool {
        let key = item.unique_key();
        if self.index.contains(&key) {
            return false;
        }

        let pos = search::binary_of(&self.items, &item);
        self.items.insert(pos, item);
        self.index.insert(key);
        true
    }

    /// Removes the item with the same unique key as `item`, returning it.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let pos = self.position(item)?;
        let removed = self.items.remove(pos);
        self.index.remove(&removed.unique_key());
        Some(removed)
    }

    /// Returns the position of `item` in [`values`](SortableSet::values), if present.
    pub fn position(&self, item: &T) -> Option<usize> {
        let key = item.unique_key();
        if !self.index.contains(&key) {
            return None;
        }

        // The binary search lands on the first item not less than `item`; walk the run of items
        // that compare equal to it in case several share a position in the order.
        let start = search::binary_of(&self.items, item);
        self.items[start..]
            .iter()
            .take_while(|other| !item.less(other))
            .position(|other| other.unique_key() == key)
            .map(|offset| start + offset)
    }

    /// Returns the items in ascending order.
    pub fn values(&self) -> &[T] {
        &self.items
    }

    /// Returns the item at position `i`, or None if `i` is out of bounds.
    pub fn get(&self, i: usize) -> Option<&T> {
        if arrays::out_of_bounds(&self.items, i) {
            return None;
        }
        Some(&self.items[i])
    }

    /// Removes and returns the item at position `i`, or None if `i` is out of bounds.
    pub fn exclude(&mut self, i: usize) -> Option<T> {
        if arrays::out_of_bounds(&self.items, i) {
            return None;
        }
        let removed = self.items.remove(i);
        self.index.remove(&removed.unique_key());
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the set, returning its items in ascending order.
    pub fn into_values(self) -> Vec<T> {
        self.items
    }
}

impl<T: Sortable> Set<T> for SortableSet<T> {
    fn has(&self, item: &T) -> bool {
        SortableSet::has(self, item)
    }

    fn add(&mut self, item: T) -> bool {
        SortableSet::add(self, item)
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        SortableSet::remove(self, item)
    }

    fn len(&self) -> usize {
        SortableSet::len(self)
    }

    fn values(&self) -> &[T] {
        SortableSet::values(self)
    }

    fn clear(&mut self) {
        SortableSet::clear(self)
    }
}

impl<T: Sortable> Default for SortableSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sortable> FromIterator<T> for SortableSet<T> {
    /// Sorts the items once up front instead of binary searching each insertion.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        sorts::quick_of(&mut values);

        let mut set = SortableSet::with_cap(values.len());
        for value in values {
            // Sorted, so appending keeps the order. Duplicates are dropped here.
            if set.index.insert(value.unique_key()) {
                set.items.push(value);
            }
        }
        set
    }
}

impl<T: Sortable> Extend<T> for SortableSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Sortable> IntoIterator for SortableSet<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Sortable> IntoIterator for &'a SortableSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Sortable> PartialEq for SortableSet<T> {
    /// Both sides are sorted, so the items can be compared pairwise.
    fn eq(&self, other: &Self) -> bool {
        arrays::sorted_equals_by(&self.items, &other.items, |a, b| a.equal(b))
            && self.index == other.index
    }
}

impl<T: Sortable + Display> Display for SortableSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{{}}}", join_display(&self.items, ", "))
    }
}
